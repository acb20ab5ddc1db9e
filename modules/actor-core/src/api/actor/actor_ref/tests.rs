use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use super::*;
use crate::api::actor::{spawn, Behaviors, Props};
use crate::api::test_support::ManualDispatcher;

#[test]
fn clones_address_the_same_mailbox() {
  let dispatcher = ManualDispatcher::new();
  let log = Arc::new(Mutex::new(Vec::new()));
  let seen = Arc::clone(&log);
  let behavior = Behaviors::receive(move |_ctx, message: u32| {
    seen.lock().push(message);
    Ok(Behaviors::same())
  });
  let actor = spawn(ActorPath::root().child("user").child("a"), Props::new(behavior), Arc::new(dispatcher.clone()));
  let alias = actor.clone();

  actor.tell(1);
  alias.tell(2);
  dispatcher.run_until_idle();

  assert_eq!(log.lock().clone(), alloc::vec![1, 2]);
  assert_eq!(alias.path(), actor.path());
}

#[test]
fn system_refs_to_the_same_actor_compare_equal() {
  let dispatcher = ManualDispatcher::new();
  let behavior = Behaviors::receive(|_ctx, _message: u32| Ok(Behaviors::same()));
  let actor = spawn(ActorPath::root().child("user").child("a"), Props::new(behavior), Arc::new(dispatcher));

  assert_eq!(actor.system_ref(), actor.system_ref());
  assert_eq!(actor.system_ref().path(), actor.path());
}
