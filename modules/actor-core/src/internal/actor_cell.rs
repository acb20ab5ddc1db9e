use alloc::sync::Weak;
use alloc::vec::Vec;
use core::mem;

use kestrel_utils_core_rs::Element;

use crate::api::actor::{ActorFailure, ActorPath, Behavior, Context, Signal, SystemActorRef};
use crate::api::mailbox::{Envelope, Mailbox, SystemMessage};
use crate::api::supervision::{FailureEventListener, FailureInfo};


/// Lifecycle state of a cell.
///
/// `Stopped` and `Failed` are terminal: there is no in-place restart. An
/// external supervision decision to restart produces a new cell and mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellState {
  Starting,
  Running,
  Stopped,
  Failed,
}

impl CellState {
  pub(crate) fn is_terminal(self) -> bool {
    matches!(self, CellState::Stopped | CellState::Failed)
  }
}

/// Owns an actor's identity and current behavior.
///
/// Every method is invoked by the owning mailbox's run loop, never
/// concurrently; the single-active-runner invariant is what makes the
/// unsynchronized mutation of `behavior`, `watchers`, and `watching` sound.
pub(crate) struct ActorCell<M>
where
  M: Element, {
  path:             ActorPath,
  state:            CellState,
  behavior:         Behavior<M>,
  myself:           SystemActorRef,
  mailbox:          Weak<Mailbox<M>>,
  watchers:         Vec<SystemActorRef>,
  watching:         Vec<SystemActorRef>,
  failure_listener: Option<FailureEventListener>,
}

impl<M> ActorCell<M>
where
  M: Element,
{
  pub(crate) fn new(
    path: ActorPath,
    behavior: Behavior<M>,
    myself: SystemActorRef,
    mailbox: Weak<Mailbox<M>>,
    failure_listener: Option<FailureEventListener>,
  ) -> Self {
    Self {
      path,
      state: CellState::Starting,
      behavior,
      myself,
      mailbox,
      watchers: Vec::new(),
      watching: Vec::new(),
      failure_listener,
    }
  }

  pub(crate) fn state(&self) -> CellState {
    self.state
  }

  /// Applies the current behavior to a user message.
  ///
  /// Returns whether the run loop should keep draining; `false` after a
  /// failure or a stop requested by the behavior.
  pub(crate) fn interpret_message(&mut self, envelope: Envelope<M>) -> bool {
    if self.state.is_terminal() {
      return false;
    }
    let message = envelope.into_payload();
    let mut current = mem::replace(&mut self.behavior, Behavior::Same);
    let outcome = match &mut current {
      | Behavior::Receive(receive) => {
        let mut ctx = Context::new(&self.path, &self.myself, &mut self.watching, &self.mailbox);
        receive.apply_message(&mut ctx, message)
      },
      | _ => Err(ActorFailure::new("behavior cannot receive messages")),
    };
    self.settle(current, outcome)
  }

  /// Handles a lifecycle message. Same continuation contract as
  /// [`ActorCell::interpret_message`].
  pub(crate) fn interpret_system_message(&mut self, message: SystemMessage) -> bool {
    match message {
      | SystemMessage::Start => self.start(),
      | SystemMessage::Watch(watcher) => self.register_watcher(watcher),
      | SystemMessage::Unwatch(watcher) => {
        self.watchers.retain(|known| known != &watcher);
        !self.state.is_terminal()
      },
      | SystemMessage::Terminated(subject) => self.handle_terminated(subject),
      | SystemMessage::Stop => {
        if !self.state.is_terminal() {
          self.transition_to_stopped();
        }
        false
      },
      // mailbox-internal messages are consumed before reaching the cell
      | SystemMessage::Suspend | SystemMessage::Resume => !self.state.is_terminal(),
    }
  }

  /// Sole failure transition; reports upward through the failure listener
  /// and notifies watchers.
  pub(crate) fn fail(&mut self, failure: ActorFailure) {
    if self.state.is_terminal() {
      return;
    }
    self.state = CellState::Failed;
    self.behavior = Behavior::Stopped;
    #[cfg(feature = "tracing")]
    tracing::error!(target: "kestrel::actor", actor_path = %self.path, failure = %failure, "actor failed");
    self.report_failure(failure);
    self.notify_watchers();
  }

  fn start(&mut self) -> bool {
    if self.state != CellState::Starting {
      return !self.state.is_terminal();
    }
    self.state = CellState::Running;
    let current = mem::replace(&mut self.behavior, Behavior::Same);
    match current {
      | Behavior::Setup(setup) => {
        let outcome = {
          let mut ctx = Context::new(&self.path, &self.myself, &mut self.watching, &self.mailbox);
          setup(&mut ctx)
        };
        match outcome {
          | Ok(Behavior::Receive(receive)) => {
            self.behavior = Behavior::Receive(receive);
            true
          },
          | Ok(Behavior::Stopped) => {
            self.transition_to_stopped();
            false
          },
          | Ok(_) => {
            self.fail(ActorFailure::new("setup must return a concrete behavior"));
            false
          },
          | Err(failure) => {
            self.fail(failure);
            false
          },
        }
      },
      | other => {
        self.behavior = other;
        true
      },
    }
  }

  fn register_watcher(&mut self, watcher: SystemActorRef) -> bool {
    if self.state.is_terminal() {
      // the watch lost the race against termination; answer immediately
      watcher.send_system_message(SystemMessage::Terminated(self.myself.clone()));
      return false;
    }
    if !self.watchers.iter().any(|known| known == &watcher) {
      self.watchers.push(watcher);
    }
    true
  }

  fn handle_terminated(&mut self, subject: SystemActorRef) -> bool {
    if self.state.is_terminal() {
      return false;
    }
    let watched = self.watching.iter().position(|known| known == &subject);
    match watched {
      | Some(index) => {
        self.watching.remove(index);
        self.deliver_signal(Signal::Terminated(subject.path().clone()))
      },
      // not watched: a stale notification after an unwatch
      | None => true,
    }
  }

  fn deliver_signal(&mut self, signal: Signal) -> bool {
    let mut current = mem::replace(&mut self.behavior, Behavior::Same);
    let outcome = match &mut current {
      | Behavior::Receive(receive) => {
        let mut ctx = Context::new(&self.path, &self.myself, &mut self.watching, &self.mailbox);
        receive.apply_signal(&mut ctx, signal)
      },
      | _ => Ok(Behavior::Same),
    };
    self.settle(current, outcome)
  }

  fn settle(&mut self, current: Behavior<M>, outcome: Result<Behavior<M>, ActorFailure>) -> bool {
    match outcome {
      | Ok(next) => self.install(current, next),
      | Err(failure) => {
        self.fail(failure);
        false
      },
    }
  }

  fn install(&mut self, current: Behavior<M>, next: Behavior<M>) -> bool {
    match next {
      | Behavior::Same => {
        self.behavior = current;
        true
      },
      | Behavior::Receive(receive) => {
        self.behavior = Behavior::Receive(receive);
        true
      },
      | Behavior::Stopped => {
        self.behavior = current;
        self.transition_to_stopped();
        false
      },
      | Behavior::Setup(_) => {
        self.fail(ActorFailure::new("setup is not a valid successor behavior"));
        false
      },
    }
  }

  fn transition_to_stopped(&mut self) {
    // PostStop runs against the final behavior; its outcome cannot
    // resurrect the actor
    let mut current = mem::replace(&mut self.behavior, Behavior::Stopped);
    if let Behavior::Receive(receive) = &mut current {
      let outcome = {
        let mut ctx = Context::new(&self.path, &self.myself, &mut self.watching, &self.mailbox);
        receive.apply_signal(&mut ctx, Signal::PostStop)
      };
      if let Err(failure) = outcome {
        self.report_failure(failure);
      }
    }
    self.state = CellState::Stopped;
    self.notify_watchers();
  }

  fn report_failure(&self, failure: ActorFailure) {
    if let Some(listener) = &self.failure_listener {
      listener.notify(FailureInfo::new(self.path.clone(), failure));
    }
  }

  fn notify_watchers(&mut self) {
    self.watching.clear();
    for watcher in self.watchers.drain(..) {
      #[cfg(feature = "tracing")]
      tracing::trace!(
        target: "kestrel::actor",
        actor_path = %self.path,
        watcher = %watcher.path(),
        "notifying watcher of termination"
      );
      watcher.send_system_message(SystemMessage::Terminated(self.myself.clone()));
    }
  }
}
