use portable_atomic::{AtomicU64, Ordering};

#[cfg(test)]
mod tests;

const CLOSED: u64 = 1;
const SUSPENDED: u64 = 1 << 1;
const SCHEDULED: u64 = 1 << 2;
const ACTIVATION_SHIFT: u32 = 3;
const ACTIVATION_UNIT: u64 = 1 << ACTIVATION_SHIFT;

const fn activation_count(bits: u64) -> u64 {
  bits >> ACTIVATION_SHIFT
}

/// Atomically updated mailbox state word.
///
/// Layout: bit 0 marks the mailbox closed, bit 1 restricts processing to
/// system messages, bit 2 is the runner claim, and the remaining bits count
/// activations (messages enqueued but not yet processed).
///
/// The runner claim is the single-active-runner invariant: a run loop is
/// scheduled only by winning the claim, and the claim is surrendered only by
/// the runner itself once it finds no more eligible work. Closing the mailbox
/// retires the claim permanently, so a closed mailbox can never be scheduled
/// again.
pub(crate) struct MailboxStatus {
  bits: AtomicU64,
}

impl MailboxStatus {
  pub(crate) const fn new() -> Self {
    Self { bits: AtomicU64::new(0) }
  }

  pub(crate) fn is_closed(&self) -> bool {
    self.bits.load(Ordering::Acquire) & CLOSED != 0
  }

  pub(crate) fn is_suspended(&self) -> bool {
    self.bits.load(Ordering::Acquire) & SUSPENDED != 0
  }

  pub(crate) fn is_scheduled(&self) -> bool {
    self.bits.load(Ordering::Acquire) & SCHEDULED != 0
  }

  pub(crate) fn suspend(&self) {
    self.bits.fetch_or(SUSPENDED, Ordering::AcqRel);
  }

  pub(crate) fn resume(&self) {
    self.bits.fetch_and(!SUSPENDED, Ordering::AcqRel);
  }

  /// Accounts for one enqueued message. Fails only on a closed mailbox, in
  /// which case nothing was recorded.
  pub(crate) fn register_enqueue(&self) -> bool {
    self
      .bits
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
        if bits & CLOSED != 0 {
          None
        } else {
          Some(bits + ACTIVATION_UNIT)
        }
      })
      .is_ok()
  }

  /// Rolls back a registration whose enqueue was rejected by the queue.
  pub(crate) fn cancel_enqueue(&self) {
    let _ = self.bits.fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
      if activation_count(bits) == 0 {
        None
      } else {
        Some(bits - ACTIVATION_UNIT)
      }
    });
  }

  /// Subtracts processed messages at the end of a run and returns the number
  /// of activations still pending.
  pub(crate) fn count_processed(&self, processed: u64) -> u64 {
    let mut remaining = 0;
    let _ = self.bits.fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
      let count = activation_count(bits);
      let settled = count.min(processed);
      remaining = count - settled;
      Some(bits - settled * ACTIVATION_UNIT)
    });
    remaining
  }

  /// Attempts to take the runner claim. Exactly one caller can win between
  /// two releases; a closed mailbox refuses every claim.
  pub(crate) fn try_claim(&self) -> bool {
    self
      .bits
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
        if bits & (CLOSED | SCHEDULED) != 0 {
          None
        } else {
          Some(bits | SCHEDULED)
        }
      })
      .is_ok()
  }

  /// Surrenders the runner claim.
  pub(crate) fn release_claim(&self) {
    self.bits.fetch_and(!SCHEDULED, Ordering::AcqRel);
  }

  /// Marks the mailbox closed. Returns `true` on the first transition.
  pub(crate) fn close(&self) -> bool {
    self.bits.fetch_or(CLOSED, Ordering::AcqRel) & CLOSED == 0
  }

  /// Number of messages enqueued but not yet processed.
  pub(crate) fn activations(&self) -> u64 {
    activation_count(self.bits.load(Ordering::Acquire))
  }
}
