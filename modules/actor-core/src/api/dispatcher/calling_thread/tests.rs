use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use super::*;
use crate::api::actor::{spawn, ActorPath, Behaviors, Props};

#[test]
fn tasks_run_inline() {
  let dispatcher = CallingThreadDispatcher;
  let ran = Arc::new(Mutex::new(false));
  let observed = Arc::clone(&ran);
  dispatcher.execute(Runnable::new(move || {
    *observed.lock() = true;
  }));
  assert!(*ran.lock());
}

#[test]
fn an_actor_processes_synchronously_with_the_send() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let seen = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    seen.lock().push(message);
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("inline"),
    Props::new(behavior),
    Arc::new(CallingThreadDispatcher),
  );

  actor.tell(1);
  // the inline dispatcher has already drained the mailbox by the time tell returns
  assert_eq!(log.lock().clone(), alloc::vec![1]);
}
