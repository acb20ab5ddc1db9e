use crate::api::actor::SystemActorRef;


/// Control-plane messages governing actor lifecycle.
///
/// System messages travel on a dedicated mailbox lane that is drained before
/// any user message, so a flooded actor can still observe its own shutdown
/// and death-watch traffic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SystemMessage {
  /// Makes the cell run its setup and begin accepting user messages.
  Start,
  /// Registers `watcher` for a termination notification from this actor.
  Watch(SystemActorRef),
  /// Removes a previously registered watcher.
  Unwatch(SystemActorRef),
  /// Notifies that the referenced actor terminated.
  Terminated(SystemActorRef),
  /// Instructs the actor to stop.
  Stop,
  /// Restricts the mailbox to system-only processing.
  Suspend,
  /// Lifts a previous [`SystemMessage::Suspend`].
  Resume,
}

impl SystemMessage {
  /// Returns `true` for messages the mailbox consumes itself without
  /// involving the cell.
  #[must_use]
  pub fn is_mailbox_internal(&self) -> bool {
    matches!(self, SystemMessage::Suspend | SystemMessage::Resume)
  }
}
