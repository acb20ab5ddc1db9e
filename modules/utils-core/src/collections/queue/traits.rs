use crate::collections::queue::{OfferOutcome, QueueError, QueueSize};

/// Base queue interface exposing size information.
pub trait QueueBase<E> {
  /// Returns the current number of stored elements.
  fn len(&self) -> QueueSize;

  /// Returns the maximum number of storable elements.
  fn capacity(&self) -> QueueSize;

  /// Checks whether the queue currently holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }
}

/// Read/write operations available through shared references.
pub trait QueueRw<E>: QueueBase<E> {
  /// Adds an element to the queue, reporting how capacity was made for it.
  fn offer(&self, element: E) -> Result<OfferOutcome, QueueError<E>>;

  /// Removes the next element from the queue, if any.
  fn poll(&self) -> Result<Option<E>, QueueError<E>>;

  /// Discards buffered elements and closes the queue.
  fn clean_up(&self);
}
