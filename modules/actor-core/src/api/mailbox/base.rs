use alloc::sync::{Arc, Weak};
use core::fmt;

use kestrel_utils_core_rs::{Element, MpscQueue, OfferOutcome, QueueBase, QueueRw, QueueSize};
use spin::Mutex;

use crate::api::actor::actor_ref::MailboxSystemSender;
use crate::api::actor::{ActorPath, Behavior, SystemActorRef};
use crate::api::dispatcher::{DispatcherRef, Runnable};
use crate::api::mailbox::{Envelope, MailboxOptions, SystemMessage};
use crate::api::metrics::{MetricsEvent, MetricsSinkShared};
use crate::api::supervision::FailureEventListener;
use crate::internal::actor_cell::ActorCell;
use crate::internal::mailbox_status::MailboxStatus;

#[cfg(test)]
mod tests;

/// Concurrent, dual-queue mailbox owning one actor cell.
///
/// User messages travel on a bounded queue, control messages on an unbounded
/// priority lane that a run loop drains first. A single atomic status word
/// tracks the closed flag, the system-only-processing flag, the runner claim,
/// and the activation count; there is no lock shared between producers.
///
/// Enqueue paths never block and are safe under arbitrarily many concurrent
/// callers. At most one run loop is ever active for a mailbox: runs are
/// scheduled on the [`DispatcherRef`] only by winning the status word's
/// runner claim, and the claim is surrendered only by the runner itself.
pub struct Mailbox<M>
where
  M: Element, {
  path:           ActorPath,
  status:         MailboxStatus,
  system_queue:   MpscQueue<SystemMessage>,
  user_queue:     MpscQueue<Envelope<M>>,
  max_run_length: usize,
  dispatcher:     DispatcherRef,
  cell:           Mutex<ActorCell<M>>,
  system_sender:  SystemActorRef,
  self_weak:      Weak<Mailbox<M>>,
  metrics_sink:   Option<MetricsSinkShared>,
}

impl<M> Mailbox<M>
where
  M: Element,
{
  pub(crate) fn create(
    path: ActorPath,
    behavior: Behavior<M>,
    options: MailboxOptions,
    dispatcher: DispatcherRef,
    failure_listener: Option<FailureEventListener>,
    metrics_sink: Option<MetricsSinkShared>,
  ) -> Arc<Self> {
    Arc::new_cyclic(|weak: &Weak<Self>| {
      let system_sender = SystemActorRef::new(Arc::new(MailboxSystemSender::new(path.clone(), weak.clone())));
      let cell = ActorCell::new(path.clone(), behavior, system_sender.clone(), weak.clone(), failure_listener);
      let user_queue = match options.capacity {
        | QueueSize::Limitless => MpscQueue::unbounded(),
        | QueueSize::Limited(limit) => MpscQueue::bounded(limit, options.overflow_policy),
      };
      Self {
        path,
        status: MailboxStatus::new(),
        system_queue: MpscQueue::unbounded(),
        user_queue,
        max_run_length: options.max_run_length.max(1),
        dispatcher,
        cell: Mutex::new(cell),
        system_sender,
        self_weak: weak.clone(),
        metrics_sink,
      }
    })
  }

  /// Path of the owning actor.
  #[must_use]
  pub fn path(&self) -> &ActorPath {
    &self.path
  }

  /// Returns `true` once the mailbox is closed. Closing is one-way.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.status.is_closed()
  }

  /// Returns `true` while the mailbox is restricted to system messages.
  #[must_use]
  pub fn is_suspended(&self) -> bool {
    self.status.is_suspended()
  }

  /// Number of messages enqueued but not yet interpreted.
  #[must_use]
  pub fn pending_messages(&self) -> u64 {
    self.status.activations()
  }

  /// Type-erased control-plane handle for this mailbox's actor.
  #[must_use]
  pub fn system_ref(&self) -> SystemActorRef {
    self.system_sender.clone()
  }

  /// Enqueues a user message.
  ///
  /// Never blocks. Against a closed mailbox, or when the bounded user queue
  /// rejects the message, the envelope is dropped: user traffic carries no
  /// delivery guarantee. When this enqueue finds the mailbox without an
  /// active runner it requests one from the dispatcher.
  pub fn send_message(&self, envelope: Envelope<M>) {
    if !self.status.register_enqueue() {
      self.record_user_drop();
      return;
    }
    match self.user_queue.offer(envelope) {
      | Ok(outcome) => {
        if outcome == OfferOutcome::DroppedOldest {
          // the evicted message was registered too
          self.status.cancel_enqueue();
          self.record_user_drop();
        }
        self.record(MetricsEvent::MailboxEnqueued);
        if !self.status.is_suspended() {
          self.try_schedule();
        }
      },
      | Err(_rejected) => {
        self.status.cancel_enqueue();
        self.record_user_drop();
      },
    }
  }

  /// Enqueues a control message on the priority lane.
  ///
  /// Never blocks. Against a closed mailbox the message is not queued;
  /// [`Mailbox::handle_on_closed_mailbox`] runs synchronously on the calling
  /// thread instead, which is what keeps the death-watch guarantee alive for
  /// watches that race against termination.
  pub fn send_system_message(&self, message: SystemMessage) {
    if !self.status.register_enqueue() {
      self.handle_on_closed_mailbox(message);
      return;
    }
    match self.system_queue.offer(message) {
      | Ok(_accepted) => {
        self.record(MetricsEvent::MailboxEnqueued);
        self.try_schedule();
      },
      | Err(rejected) => {
        // the system lane only rejects once it has been closed
        self.status.cancel_enqueue();
        if let Some(message) = rejected.into_element() {
          self.handle_on_closed_mailbox(message);
        }
      },
    }
  }

  /// Synchronous fallback for system messages targeting a closed mailbox.
  ///
  /// A `Watch` is answered with a synthesized `Terminated` sent straight back
  /// to the watcher; every other message kind is discarded.
  pub fn handle_on_closed_mailbox(&self, message: SystemMessage) {
    self.record(MetricsEvent::SystemMessageHandledOnClosed);
    match message {
      | SystemMessage::Watch(watcher) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
          target: "kestrel::mailbox",
          actor_path = %self.path,
          watcher = %watcher.path(),
          "watch against closed mailbox, synthesizing terminated"
        );
        watcher.send_system_message(SystemMessage::Terminated(self.system_sender.clone()));
      },
      | message => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
          target: "kestrel::mailbox",
          actor_path = %self.path,
          discarded = ?message,
          "discarding system message on closed mailbox"
        );
        let _ = message;
      },
    }
  }

  /// Batch-processing entry point, invoked only through the dispatcher.
  ///
  /// Drains the system lane first and re-checks it before every user message,
  /// then drains up to `max_run_length` user messages. When the cell requests
  /// a halt the mailbox closes; otherwise the run reschedules itself if work
  /// remains (budget exhausted or producers raced with the drain).
  pub(crate) fn run(self: Arc<Self>) {
    let mut processed: u64 = 0;
    let mut user_processed: usize = 0;
    let mut keep_running = true;
    {
      // uncontended: the runner claim admits one runner at a time
      let mut cell = self.cell.lock();
      loop {
        if let Ok(Some(message)) = self.system_queue.poll() {
          processed += 1;
          keep_running = self.dispatch_system(&mut cell, message);
          if !keep_running {
            break;
          }
          continue;
        }
        if self.status.is_suspended() || user_processed == self.max_run_length {
          break;
        }
        match self.user_queue.poll() {
          | Ok(Some(envelope)) => {
            processed += 1;
            user_processed += 1;
            keep_running = self.dispatch_user(&mut cell, envelope);
            if !keep_running {
              break;
            }
          },
          | _ => break,
        }
      }
      if !keep_running {
        self.close_and_drain();
      }
    }
    self.status.count_processed(processed);
    if !keep_running {
      // the claim retires with the closed mailbox
      return;
    }
    self.status.release_claim();
    let system_pending = !self.system_queue.is_empty();
    let user_pending = !self.status.is_suspended() && !self.user_queue.is_empty();
    if system_pending || user_pending {
      self.try_schedule();
    }
  }

  fn dispatch_system(&self, cell: &mut ActorCell<M>, message: SystemMessage) -> bool {
    self.record(MetricsEvent::MessageProcessed);
    match message {
      | SystemMessage::Suspend => {
        self.status.suspend();
        true
      },
      | SystemMessage::Resume => {
        self.status.resume();
        true
      },
      | message => self.interpret_system(cell, message),
    }
  }

  fn dispatch_user(&self, cell: &mut ActorCell<M>, envelope: Envelope<M>) -> bool {
    self.record(MetricsEvent::MessageProcessed);
    self.interpret_user(cell, envelope)
  }

  #[cfg(feature = "unwind-supervision")]
  fn interpret_system(&self, cell: &mut ActorCell<M>, message: SystemMessage) -> bool {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::api::actor::ActorFailure;

    match catch_unwind(AssertUnwindSafe(|| cell.interpret_system_message(message))) {
      | Ok(keep_running) => keep_running,
      | Err(payload) => {
        cell.fail(ActorFailure::from_panic_payload(payload.as_ref()));
        false
      },
    }
  }

  #[cfg(not(feature = "unwind-supervision"))]
  fn interpret_system(&self, cell: &mut ActorCell<M>, message: SystemMessage) -> bool {
    cell.interpret_system_message(message)
  }

  #[cfg(feature = "unwind-supervision")]
  fn interpret_user(&self, cell: &mut ActorCell<M>, envelope: Envelope<M>) -> bool {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::api::actor::ActorFailure;

    match catch_unwind(AssertUnwindSafe(|| cell.interpret_message(envelope))) {
      | Ok(keep_running) => keep_running,
      | Err(payload) => {
        cell.fail(ActorFailure::from_panic_payload(payload.as_ref()));
        false
      },
    }
  }

  #[cfg(not(feature = "unwind-supervision"))]
  fn interpret_user(&self, cell: &mut ActorCell<M>, envelope: Envelope<M>) -> bool {
    cell.interpret_message(envelope)
  }

  fn close_and_drain(&self) {
    if !self.status.close() {
      return;
    }
    self.record(MetricsEvent::MailboxClosed);
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "kestrel::mailbox", actor_path = %self.path, "mailbox closed");
    self.user_queue.clean_up();
    // keep buffered control messages pollable so no watch enqueued before the
    // close can be lost; later offers fail over to the sender-side fallback
    self.system_queue.close();
    while let Ok(Some(message)) = self.system_queue.poll() {
      self.handle_on_closed_mailbox(message);
    }
  }

  fn try_schedule(&self) {
    if !self.status.try_claim() {
      return;
    }
    match self.self_weak.upgrade() {
      | Some(mailbox) => self.dispatcher.execute(Runnable::new(move || mailbox.run())),
      | None => self.status.release_claim(),
    }
  }

  fn record(&self, event: MetricsEvent) {
    if let Some(sink) = &self.metrics_sink {
      sink.record(event);
    }
  }

  fn record_user_drop(&self) {
    self.record(MetricsEvent::UserMessageDropped);
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "kestrel::mailbox", actor_path = %self.path, "dropping user message");
  }
}

impl<M> fmt::Debug for Mailbox<M>
where
  M: Element,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Mailbox").field("path", &self.path).finish()
  }
}
