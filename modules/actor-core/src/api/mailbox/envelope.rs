use crate::api::actor::ActorPath;

#[cfg(test)]
mod tests;

/// Immutable wrapper carrying a user message through the mailbox.
///
/// Ownership moves from the sender into the queue and out to the cell, which
/// consumes the envelope exactly once. The sender path, when present, is
/// debugging and tracing metadata; it does not make the sender addressable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope<M> {
  payload: M,
  sender:  Option<ActorPath>,
}

impl<M> Envelope<M> {
  /// Wraps a payload without sender metadata.
  pub fn new(payload: M) -> Self {
    Self { payload, sender: None }
  }

  /// Wraps a payload recording the sending actor's path.
  pub fn with_sender(payload: M, sender: ActorPath) -> Self {
    Self { payload, sender: Some(sender) }
  }

  /// Returns a reference to the enclosed payload.
  pub fn payload(&self) -> &M {
    &self.payload
  }

  /// Returns the recorded sender path, if any.
  pub fn sender(&self) -> Option<&ActorPath> {
    self.sender.as_ref()
  }

  /// Consumes the envelope, yielding the payload.
  pub fn into_payload(self) -> M {
    self.payload
  }

  /// Consumes the envelope, yielding payload and sender metadata.
  pub fn into_parts(self) -> (M, Option<ActorPath>) {
    (self.payload, self.sender)
  }

  /// Maps the payload while preserving sender metadata.
  pub fn map<N>(self, f: impl FnOnce(M) -> N) -> Envelope<N> {
    Envelope { payload: f(self.payload), sender: self.sender }
  }
}
