use alloc::sync::Arc;
use alloc::vec::Vec;

use kestrel_utils_core_rs::OverflowPolicy;
use spin::Mutex;

use super::*;
use crate::api::actor::{spawn, ActorRef, Behaviors, Props, Signal};
use crate::api::supervision::FailureInfo;
use crate::api::test_support::{ManualDispatcher, RecordingSink};
use crate::{ActorFailure, FailureEventListener, MetricsEvent};

fn spawn_recorder(
  dispatcher: &ManualDispatcher,
  options: MailboxOptions,
) -> (ActorRef<u32>, Arc<Mutex<Vec<u32>>>) {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seen = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    seen.lock().push(message);
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("recorder"),
    Props::new(behavior).with_mailbox_options(options),
    Arc::new(dispatcher.clone()),
  );
  (actor, log)
}

#[test]
fn start_runs_setup_before_the_first_message() {
  let dispatcher = ManualDispatcher::new();
  let log = Arc::new(Mutex::new(Vec::new()));
  let setup_log = Arc::clone(&log);
  let behavior = Behaviors::setup(move |_ctx| {
    setup_log.lock().push(0u32);
    let receive_log = Arc::clone(&setup_log);
    Ok(Behaviors::receive(move |_ctx, message: u32| {
      receive_log.lock().push(message);
      Ok(Behaviors::same())
    }))
  });
  let actor = spawn(
    ActorPath::root().child("user").child("setup"),
    Props::new(behavior),
    Arc::new(dispatcher.clone()),
  );
  actor.tell(1);
  actor.tell(2);

  dispatcher.run_until_idle();
  assert_eq!(log.lock().clone(), alloc::vec![0, 1, 2]);
}

#[test]
fn system_messages_drain_before_queued_user_messages() {
  let dispatcher = ManualDispatcher::new();
  let (actor, log) = spawn_recorder(&dispatcher, MailboxOptions::default());

  // user messages first, then a control message; the control message still
  // wins inside the same run
  actor.tell(1);
  actor.tell(2);
  actor.tell(3);
  actor.send_system_message(SystemMessage::Suspend);

  assert!(dispatcher.step());
  assert!(log.lock().is_empty());
  assert_eq!(dispatcher.pending(), 0);

  actor.send_system_message(SystemMessage::Resume);
  assert!(dispatcher.step());
  assert_eq!(log.lock().clone(), alloc::vec![1, 2, 3]);
}

#[test]
fn run_length_budget_forces_a_reschedule() {
  let dispatcher = ManualDispatcher::new();
  let options = MailboxOptions::default().with_max_run_length(2);
  let (actor, log) = spawn_recorder(&dispatcher, options);
  for n in 0..5 {
    actor.tell(n);
  }

  assert!(dispatcher.step());
  assert_eq!(log.lock().len(), 2);
  assert_eq!(dispatcher.pending(), 1);

  assert!(dispatcher.step());
  assert_eq!(log.lock().len(), 4);

  assert!(dispatcher.step());
  assert_eq!(log.lock().len(), 5);
  assert_eq!(dispatcher.pending(), 0);
}

#[test]
fn no_message_sent_before_close_is_lost_or_reinterpreted() {
  let dispatcher = ManualDispatcher::new();
  let (actor, log) = spawn_recorder(&dispatcher, MailboxOptions::default());
  for n in 0..100 {
    actor.tell(n);
  }

  dispatcher.run_until_idle();
  let seen = log.lock().clone();
  assert_eq!(seen, (0..100).collect::<Vec<_>>());
}

#[test]
fn closed_mailbox_rejects_user_sends() {
  let dispatcher = ManualDispatcher::new();
  let sink = RecordingSink::new();
  let log = Arc::new(Mutex::new(Vec::new()));
  let seen = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    seen.lock().push(message);
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("doomed"),
    Props::new(behavior).with_metrics_sink(crate::MetricsSinkShared::new(sink.clone())),
    Arc::new(dispatcher.clone()),
  );
  actor.stop();
  dispatcher.run_until_idle();
  assert!(actor.is_terminated());
  assert_eq!(sink.count(MetricsEvent::MailboxClosed), 1);

  actor.tell(7);
  dispatcher.run_until_idle();
  assert!(log.lock().is_empty());
  assert_eq!(sink.count(MetricsEvent::UserMessageDropped), 1);
}

#[test]
fn capacity_overflow_applies_the_configured_policy() {
  let dispatcher = ManualDispatcher::new();
  let options = MailboxOptions::with_capacity(2);
  let (actor, log) = spawn_recorder(&dispatcher, options);
  actor.tell(1);
  actor.tell(2);
  actor.tell(3);
  dispatcher.run_until_idle();
  assert_eq!(log.lock().clone(), alloc::vec![1, 2]);

  let dispatcher = ManualDispatcher::new();
  let options = MailboxOptions::with_capacity(2).with_overflow_policy(OverflowPolicy::DropOldest);
  let (actor, log) = spawn_recorder(&dispatcher, options);
  actor.tell(1);
  actor.tell(2);
  actor.tell(3);
  dispatcher.run_until_idle();
  assert_eq!(log.lock().clone(), alloc::vec![2, 3]);
}

#[test]
fn idle_transition_is_reactivated_by_exactly_one_send() {
  let dispatcher = ManualDispatcher::new();
  let (actor, log) = spawn_recorder(&dispatcher, MailboxOptions::default());
  dispatcher.run_until_idle();

  actor.tell(1);
  assert_eq!(dispatcher.pending(), 1);
  actor.tell(2);
  // the second send finds the runner claim already taken
  assert_eq!(dispatcher.pending(), 1);

  assert!(dispatcher.step());
  assert_eq!(log.lock().clone(), alloc::vec![1, 2]);
  assert_eq!(dispatcher.pending(), 0);

  actor.tell(3);
  assert_eq!(dispatcher.pending(), 1);
}

#[test]
fn watch_against_a_closed_mailbox_synthesizes_terminated() {
  let dispatcher = ManualDispatcher::new();
  let (dead, _log) = spawn_recorder(&dispatcher, MailboxOptions::default());
  dead.stop();
  dispatcher.run_until_idle();
  assert!(dead.is_terminated());

  let terminations = Arc::new(Mutex::new(Vec::new()));
  let recorded = Arc::clone(&terminations);
  let behavior = Behaviors::receive_with_signal(
    move |ctx, subject: crate::SystemActorRef| {
      ctx.watch(&subject);
      Ok(Behaviors::same())
    },
    move |_ctx, signal| {
      if let Signal::Terminated(path) = signal {
        recorded.lock().push(path);
      }
      Ok(Behaviors::same())
    },
  );
  let watcher = spawn(
    ActorPath::root().child("user").child("watcher"),
    Props::new(behavior),
    Arc::new(dispatcher.clone()),
  );
  watcher.tell(dead.system_ref());
  dispatcher.run_until_idle();

  assert_eq!(terminations.lock().clone(), alloc::vec![dead.path().clone()]);
}

#[test]
fn stopping_notifies_watchers_through_the_ordinary_path() {
  let dispatcher = ManualDispatcher::new();
  let (subject, _log) = spawn_recorder(&dispatcher, MailboxOptions::default());

  let terminations = Arc::new(Mutex::new(Vec::new()));
  let recorded = Arc::clone(&terminations);
  let behavior = Behaviors::receive_with_signal(
    move |ctx, target: crate::SystemActorRef| {
      ctx.watch(&target);
      Ok(Behaviors::same())
    },
    move |_ctx, signal| {
      if let Signal::Terminated(path) = signal {
        recorded.lock().push(path);
      }
      Ok(Behaviors::same())
    },
  );
  let watcher = spawn(
    ActorPath::root().child("user").child("watcher"),
    Props::new(behavior),
    Arc::new(dispatcher.clone()),
  );
  watcher.tell(subject.system_ref());
  dispatcher.run_until_idle();
  assert!(terminations.lock().is_empty());

  subject.stop();
  dispatcher.run_until_idle();
  assert_eq!(terminations.lock().clone(), alloc::vec![subject.path().clone()]);
}

#[test]
fn interpretation_failure_reports_upward_and_closes() {
  let dispatcher = ManualDispatcher::new();
  let failures = Arc::new(Mutex::new(Vec::<FailureInfo>::new()));
  let reported = Arc::clone(&failures);
  let listener = FailureEventListener::new(move |info| reported.lock().push(info));

  let log = Arc::new(Mutex::new(Vec::new()));
  let seen = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    if message == 13 {
      return Err(ActorFailure::new("unlucky message"));
    }
    seen.lock().push(message);
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("fallible"),
    Props::new(behavior).with_failure_listener(listener),
    Arc::new(dispatcher.clone()),
  );
  actor.tell(1);
  actor.tell(13);
  actor.tell(2);
  dispatcher.run_until_idle();

  assert_eq!(log.lock().clone(), alloc::vec![1]);
  assert!(actor.is_terminated());
  let reported = failures.lock().clone();
  assert_eq!(reported.len(), 1);
  assert_eq!(reported[0].path, actor.path().clone());
  assert_eq!(reported[0].description(), "unlucky message");
}

#[test]
fn post_stop_is_delivered_on_the_stop_transition() {
  let dispatcher = ManualDispatcher::new();
  let signals = Arc::new(Mutex::new(Vec::new()));
  let recorded = Arc::clone(&signals);
  let behavior = Behaviors::receive_with_signal(
    move |_ctx, _message: u32| Ok(Behaviors::same()),
    move |_ctx, signal| {
      recorded.lock().push(signal);
      Ok(Behaviors::same())
    },
  );
  let actor = spawn(
    ActorPath::root().child("user").child("stoppable"),
    Props::new(behavior),
    Arc::new(dispatcher.clone()),
  );
  actor.stop();
  dispatcher.run_until_idle();

  assert_eq!(signals.lock().clone(), alloc::vec![Signal::PostStop]);
}

#[test]
fn behavior_replacement_changes_interpretation() {
  let dispatcher = ManualDispatcher::new();
  let log = Arc::new(Mutex::new(Vec::new()));
  let first_log = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    first_log.lock().push(message);
    let second_log = Arc::clone(&first_log);
    Ok(Behaviors::receive(move |_ctx, message: u32| {
      second_log.lock().push(message * 10);
      Ok(Behaviors::same())
    }))
  });
  let actor = spawn(
    ActorPath::root().child("user").child("becomer"),
    Props::new(behavior),
    Arc::new(dispatcher.clone()),
  );
  actor.tell(1);
  actor.tell(2);
  actor.tell(3);
  dispatcher.run_until_idle();

  assert_eq!(log.lock().clone(), alloc::vec![1, 20, 30]);
}

#[cfg(feature = "unwind-supervision")]
#[test]
fn panics_are_contained_and_reported() {
  let dispatcher = ManualDispatcher::new();
  let failures = Arc::new(Mutex::new(Vec::<FailureInfo>::new()));
  let reported = Arc::clone(&failures);
  let listener = FailureEventListener::new(move |info| reported.lock().push(info));
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    assert!(message != 0, "zero is not a valid message");
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("panicky"),
    Props::new(behavior).with_failure_listener(listener),
    Arc::new(dispatcher.clone()),
  );
  actor.tell(0);
  dispatcher.run_until_idle();

  assert!(actor.is_terminated());
  assert_eq!(failures.lock().len(), 1);
}
