/// Errors that may arise while operating on a queue.
///
/// Variants that reject an element hand it back by value so the caller keeps
/// ownership of the message it tried to enqueue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue is at capacity and the element was not accepted.
  Full(E),
  /// The queue has been closed; the element was not accepted.
  Closed(E),
  /// The element could not be stored for a reason other than capacity.
  OfferError(E),
  /// The underlying shared state is no longer reachable.
  Disconnected,
}

impl<E> QueueError<E> {
  /// Returns the rejected element when this error carries one.
  pub fn into_element(self) -> Option<E> {
    match self {
      | QueueError::Full(element) | QueueError::Closed(element) | QueueError::OfferError(element) => Some(element),
      | QueueError::Disconnected => None,
    }
  }
}
