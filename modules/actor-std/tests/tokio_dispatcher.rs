//! The Tokio adapter drives actors like any other dispatcher.

#![cfg(feature = "tokio")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use kestrel_actor_core_rs::{spawn, ActorPath, Behaviors, Props};
use kestrel_actor_std_rs::TokioDispatcher;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn actors_run_on_a_tokio_runtime() {
  let processed = Arc::new(AtomicUsize::new(0));
  let done = Arc::clone(&processed);
  let behavior = Behaviors::receive(move |_ctx, _message: u32| {
    done.fetch_add(1, Ordering::SeqCst);
    Ok(Behaviors::same())
  });
  let actor = spawn(
    ActorPath::root().child("user").child("tokio-actor"),
    Props::new(behavior),
    Arc::new(TokioDispatcher::current()),
  );

  for n in 0..100u32 {
    actor.tell(n);
  }
  for _ in 0..1_000 {
    if processed.load(Ordering::SeqCst) == 100 {
      break;
    }
    tokio::time::sleep(Duration::from_millis(5)).await;
  }
  assert_eq!(processed.load(Ordering::SeqCst), 100);

  actor.stop();
  for _ in 0..1_000 {
    if actor.is_terminated() {
      break;
    }
    tokio::time::sleep(Duration::from_millis(5)).await;
  }
  assert!(actor.is_terminated());
}
