use alloc::collections::VecDeque;
use alloc::sync::Arc;

use spin::Mutex;

use crate::collections::queue::{OfferOutcome, OverflowPolicy, QueueBase, QueueError, QueueRw, QueueSize};
use crate::collections::Element;


struct MpscBuffer<E> {
  entries:  VecDeque<E>,
  capacity: QueueSize,
  policy:   OverflowPolicy,
  closed:   bool,
}

impl<E> MpscBuffer<E> {
  fn offer(&mut self, element: E) -> Result<OfferOutcome, QueueError<E>> {
    if self.closed {
      return Err(QueueError::Closed(element));
    }
    let mut outcome = OfferOutcome::Accepted;
    if let QueueSize::Limited(limit) = self.capacity {
      if self.entries.len() >= limit {
        match self.policy {
          | OverflowPolicy::DropNewest => return Err(QueueError::Full(element)),
          | OverflowPolicy::DropOldest => {
            self.entries.pop_front();
            outcome = OfferOutcome::DroppedOldest;
          },
          | OverflowPolicy::Grow => {},
        }
      }
    }
    self.entries.push_back(element);
    Ok(outcome)
  }

  fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    match self.entries.pop_front() {
      | Some(element) => Ok(Some(element)),
      | None if self.closed => Err(QueueError::Disconnected),
      | None => Ok(None),
    }
  }
}

/// Multi-producer queue backed by a spin-guarded ring buffer.
///
/// Producers on any thread may `offer` concurrently; a single consumer is
/// expected to `poll`. The critical section covers only the ring-buffer
/// bookkeeping, so producers are never suspended for more than a few
/// instructions. `clean_up` discards buffered elements and closes the queue,
/// after which offers fail with [`QueueError::Closed`].
pub struct MpscQueue<E> {
  inner: Arc<Mutex<MpscBuffer<E>>>,
}

impl<E: Element> MpscQueue<E> {
  /// Creates an unbounded queue.
  #[must_use]
  pub fn unbounded() -> Self {
    Self::with_capacity(QueueSize::limitless(), OverflowPolicy::Grow)
  }

  /// Creates a bounded queue applying `policy` once `capacity` is reached.
  #[must_use]
  pub fn bounded(capacity: usize, policy: OverflowPolicy) -> Self {
    Self::with_capacity(QueueSize::limited(capacity.max(1)), policy)
  }

  fn with_capacity(capacity: QueueSize, policy: OverflowPolicy) -> Self {
    let preallocated = match capacity {
      | QueueSize::Limited(limit) if limit <= 1024 => limit,
      | _ => 0,
    };
    Self {
      inner: Arc::new(Mutex::new(MpscBuffer {
        entries: VecDeque::with_capacity(preallocated),
        capacity,
        policy: match capacity {
          | QueueSize::Limitless => OverflowPolicy::Grow,
          | QueueSize::Limited(_) => policy,
        },
        closed: false,
      })),
    }
  }

  /// Closes the queue while keeping buffered elements pollable.
  ///
  /// Later offers fail with [`QueueError::Closed`]; the consumer drains the
  /// remaining elements before `poll` starts reporting
  /// [`QueueError::Disconnected`].
  pub fn close(&self) {
    self.inner.lock().closed = true;
  }

  /// Returns `true` once the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.inner.lock().closed
  }
}

impl<E> Clone for MpscQueue<E> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}

impl<E> core::fmt::Debug for MpscQueue<E> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("MpscQueue").finish()
  }
}

impl<E: Element> QueueBase<E> for MpscQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.inner.lock().entries.len())
  }

  fn capacity(&self) -> QueueSize {
    self.inner.lock().capacity
  }
}

impl<E: Element> QueueRw<E> for MpscQueue<E> {
  fn offer(&self, element: E) -> Result<OfferOutcome, QueueError<E>> {
    self.inner.lock().offer(element)
  }

  fn poll(&self) -> Result<Option<E>, QueueError<E>> {
    self.inner.lock().poll()
  }

  fn clean_up(&self) {
    let mut buffer = self.inner.lock();
    buffer.entries.clear();
    buffer.closed = true;
  }
}
