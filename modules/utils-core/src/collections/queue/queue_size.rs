/// Queue length or capacity that may be unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueSize {
  /// No upper bound.
  Limitless,
  /// Bounded by the contained number of elements.
  Limited(usize),
}

impl QueueSize {
  /// Creates a bounded size.
  #[must_use]
  pub const fn limited(size: usize) -> Self {
    QueueSize::Limited(size)
  }

  /// Creates an unbounded size.
  #[must_use]
  pub const fn limitless() -> Self {
    QueueSize::Limitless
  }

  /// Returns `true` when no upper bound applies.
  #[must_use]
  pub const fn is_limitless(&self) -> bool {
    matches!(self, QueueSize::Limitless)
  }

  /// Converts to `usize`, saturating to `usize::MAX` for the unbounded case.
  #[must_use]
  pub const fn to_usize(&self) -> usize {
    match self {
      | QueueSize::Limitless => usize::MAX,
      | QueueSize::Limited(size) => *size,
    }
  }
}
