use alloc::sync::{Arc, Weak};
use core::fmt;

use kestrel_utils_core_rs::Element;

use crate::api::actor::ActorPath;
use crate::api::mailbox::{Envelope, Mailbox, SystemMessage};

#[cfg(test)]
mod tests;

/// Sink for control-plane messages, implemented by every mailbox.
///
/// The trait is object safe so heterogeneously typed actors can appear in one
/// watcher list.
pub trait SystemMessageSender: Send + Sync {
  /// Path of the actor behind this sender.
  fn path(&self) -> &ActorPath;

  /// Delivers a system message; callable from any thread.
  fn send_system_message(&self, message: SystemMessage);
}

/// Type-erased actor handle that can receive only system messages.
///
/// Used for death-watch bookkeeping and as the subject of
/// [`SystemMessage::Terminated`]. Equality and ordering of handles is
/// path-based: two refs to the same actor compare equal.
#[derive(Clone)]
pub struct SystemActorRef {
  inner: Arc<dyn SystemMessageSender>,
}

impl SystemActorRef {
  /// Wraps a sender implementation.
  #[must_use]
  pub fn new(sender: Arc<dyn SystemMessageSender>) -> Self {
    Self { inner: sender }
  }

  /// Path of the referenced actor.
  #[must_use]
  pub fn path(&self) -> &ActorPath {
    self.inner.path()
  }

  /// Delivers a system message to the referenced actor.
  pub fn send_system_message(&self, message: SystemMessage) {
    self.inner.send_system_message(message);
  }
}

impl fmt::Debug for SystemActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SystemActorRef({})", self.path())
  }
}

impl PartialEq for SystemActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.path() == other.path()
  }
}

impl Eq for SystemActorRef {}

/// Non-owning, copyable handle used to send messages to an actor.
///
/// Any number of threads may hold and use clones of the same ref. The ref
/// never owns the mailbox; dropping every ref while the actor is alive leaves
/// the actor unreachable but intact until it stops.
pub struct ActorRef<M>
where
  M: Element, {
  path:    ActorPath,
  mailbox: Arc<Mailbox<M>>,
}

impl<M> ActorRef<M>
where
  M: Element,
{
  pub(crate) fn new(path: ActorPath, mailbox: Arc<Mailbox<M>>) -> Self {
    Self { path, mailbox }
  }

  /// Path of the referenced actor.
  #[must_use]
  pub fn path(&self) -> &ActorPath {
    &self.path
  }

  /// Sends a user message.
  ///
  /// Never blocks. The message is silently dropped when the mailbox is closed
  /// or rejects it at capacity; user traffic carries no delivery guarantee.
  pub fn tell(&self, message: M) {
    self.mailbox.send_message(Envelope::new(message));
  }

  /// Sends a pre-built envelope, keeping its sender metadata.
  pub fn send_envelope(&self, envelope: Envelope<M>) {
    self.mailbox.send_message(envelope);
  }

  /// Sends a control-plane message on the priority path.
  pub fn send_system_message(&self, message: SystemMessage) {
    self.mailbox.send_system_message(message);
  }

  /// Asks the actor to stop after the system messages already queued.
  pub fn stop(&self) {
    self.mailbox.send_system_message(SystemMessage::Stop);
  }

  /// Returns the type-erased control-plane handle for this actor.
  #[must_use]
  pub fn system_ref(&self) -> SystemActorRef {
    self.mailbox.system_ref()
  }

  /// Returns `true` once the actor's mailbox has closed.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.mailbox.is_closed()
  }
}

impl<M> Clone for ActorRef<M>
where
  M: Element,
{
  fn clone(&self) -> Self {
    Self { path: self.path.clone(), mailbox: Arc::clone(&self.mailbox) }
  }
}

impl<M> fmt::Debug for ActorRef<M>
where
  M: Element,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ActorRef({})", self.path)
  }
}

/// Control-plane sender backed by a weak mailbox reference.
///
/// Watcher lists and `Terminated` payloads hold these, so a dead actor's
/// mailbox can be reclaimed even while notifications naming it are still in
/// flight. Sends to a reclaimed mailbox fall back to the closed-mailbox
/// protocol: a `Watch` is answered with a synthesized `Terminated`.
pub(crate) struct MailboxSystemSender<M>
where
  M: Element, {
  path:    ActorPath,
  mailbox: Weak<Mailbox<M>>,
}

impl<M> MailboxSystemSender<M>
where
  M: Element,
{
  pub(crate) fn new(path: ActorPath, mailbox: Weak<Mailbox<M>>) -> Self {
    Self { path, mailbox }
  }
}

impl<M> SystemMessageSender for MailboxSystemSender<M>
where
  M: Element,
{
  fn path(&self) -> &ActorPath {
    &self.path
  }

  fn send_system_message(&self, message: SystemMessage) {
    match self.mailbox.upgrade() {
      | Some(mailbox) => mailbox.send_system_message(message),
      | None => {
        if let SystemMessage::Watch(watcher) = message {
          let myself = SystemActorRef::new(Arc::new(Self::new(self.path.clone(), self.mailbox.clone())));
          watcher.send_system_message(SystemMessage::Terminated(myself));
        }
      },
    }
  }
}
