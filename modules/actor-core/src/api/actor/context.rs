use alloc::sync::Weak;
use alloc::vec::Vec;

use kestrel_utils_core_rs::Element;

use crate::api::actor::{ActorPath, ActorRef, SystemActorRef};
use crate::api::mailbox::{Mailbox, SystemMessage};

/// Execution context handed to behavior handlers.
///
/// Borrows the cell's death-watch bookkeeping for the duration of a single
/// message or signal interpretation; the single-active-runner invariant makes
/// the mutable borrow safe without further synchronization.
pub struct Context<'a, M>
where
  M: Element, {
  path:     &'a ActorPath,
  myself:   &'a SystemActorRef,
  watching: &'a mut Vec<SystemActorRef>,
  mailbox:  &'a Weak<Mailbox<M>>,
}

impl<'a, M> Context<'a, M>
where
  M: Element,
{
  pub(crate) fn new(
    path: &'a ActorPath,
    myself: &'a SystemActorRef,
    watching: &'a mut Vec<SystemActorRef>,
    mailbox: &'a Weak<Mailbox<M>>,
  ) -> Self {
    Self { path, myself, watching, mailbox }
  }

  /// Path of the actor being interpreted.
  #[must_use]
  pub fn path(&self) -> &ActorPath {
    self.path
  }

  /// Control-plane handle of the actor being interpreted.
  #[must_use]
  pub fn myself(&self) -> &SystemActorRef {
    self.myself
  }

  /// Typed handle of the actor being interpreted.
  #[must_use]
  pub fn self_ref(&self) -> Option<ActorRef<M>> {
    self.mailbox.upgrade().map(|mailbox| ActorRef::new(self.path.clone(), mailbox))
  }

  /// Starts watching `subject` for termination.
  ///
  /// The subject answers with [`SystemMessage::Terminated`] when it stops,
  /// delivered to this actor's behavior as [`crate::Signal::Terminated`].
  /// Watching the same subject twice is a no-op.
  pub fn watch(&mut self, subject: &SystemActorRef) {
    if self.watching.iter().any(|watched| watched == subject) {
      return;
    }
    self.watching.push(subject.clone());
    subject.send_system_message(SystemMessage::Watch(self.myself.clone()));
  }

  /// Stops watching `subject`.
  pub fn unwatch(&mut self, subject: &SystemActorRef) {
    self.watching.retain(|watched| watched != subject);
    subject.send_system_message(SystemMessage::Unwatch(self.myself.clone()));
  }

  /// Checks whether `subject` is currently watched.
  #[must_use]
  pub fn is_watching(&self, subject: &SystemActorRef) -> bool {
    self.watching.iter().any(|watched| watched == subject)
  }
}
