/// Policies describing how a bounded queue reacts when it reaches capacity.
///
/// There is deliberately no blocking variant: producers in this runtime must
/// never be suspended by an enqueue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// The newest element is rejected while enqueueing.
  DropNewest,
  /// The oldest element is removed to make room for the new one.
  DropOldest,
  /// The queue grows dynamically to accommodate more elements.
  Grow,
}

/// Result of a successful offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The element was stored without displacing anything.
  Accepted,
  /// The element was stored after evicting the oldest buffered element.
  DroppedOldest,
}
