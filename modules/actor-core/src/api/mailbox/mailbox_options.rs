use kestrel_utils_core_rs::{OverflowPolicy, QueueSize};

/// Default number of user messages drained per run invocation.
///
/// Chosen to balance latency fairness across actors sharing a dispatcher
/// against per-reschedule overhead.
pub const DEFAULT_MAX_RUN_LENGTH: usize = 100;

/// Construction options for a [`crate::Mailbox`].
///
/// The capacity bounds the user queue only; the system queue is unbounded
/// because control traffic is low-volume and must never be droppable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MailboxOptions {
  /// Capacity of the user message queue.
  pub capacity: QueueSize,
  /// Policy applied when the user queue reaches capacity.
  pub overflow_policy: OverflowPolicy,
  /// User messages drained per run invocation before a mandatory reschedule.
  pub max_run_length: usize,
}

impl MailboxOptions {
  /// Creates options with a bounded user queue.
  #[must_use]
  pub const fn with_capacity(capacity: usize) -> Self {
    Self {
      capacity: QueueSize::limited(capacity),
      overflow_policy: OverflowPolicy::DropNewest,
      max_run_length: DEFAULT_MAX_RUN_LENGTH,
    }
  }

  /// Creates options with an unbounded user queue.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self {
      capacity: QueueSize::limitless(),
      overflow_policy: OverflowPolicy::DropNewest,
      max_run_length: DEFAULT_MAX_RUN_LENGTH,
    }
  }

  /// Replaces the overflow policy.
  #[must_use]
  pub const fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
    self.overflow_policy = policy;
    self
  }

  /// Replaces the per-run drain budget.
  #[must_use]
  pub const fn with_max_run_length(mut self, max_run_length: usize) -> Self {
    self.max_run_length = max_run_length;
    self
  }
}

impl Default for MailboxOptions {
  fn default() -> Self {
    Self::unbounded()
  }
}
