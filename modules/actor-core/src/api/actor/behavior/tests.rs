use alloc::format;
use alloc::sync::Weak;
use alloc::vec::Vec;

use super::*;
use crate::api::actor::{ActorPath, SystemActorRef, SystemMessageSender};
use crate::api::mailbox::{Mailbox, SystemMessage};

struct NullSender {
  path: ActorPath,
}

impl SystemMessageSender for NullSender {
  fn path(&self) -> &ActorPath {
    &self.path
  }

  fn send_system_message(&self, _message: SystemMessage) {}
}

#[test]
fn missing_signal_handler_defaults_to_same() {
  let path = ActorPath::root().child("user").child("a");
  let myself = SystemActorRef::new(alloc::sync::Arc::new(NullSender { path: path.clone() }));
  let mut watching = Vec::new();
  let mailbox: Weak<Mailbox<u32>> = Weak::new();
  let mut ctx = Context::new(&path, &myself, &mut watching, &mailbox);

  let behavior = Behaviors::receive(|_ctx, _message: u32| Ok(Behaviors::stopped()));
  match behavior {
    | Behavior::Receive(mut receive) => {
      let outcome = receive.apply_signal(&mut ctx, Signal::PostStop);
      assert!(matches!(outcome, Ok(Behavior::Same)));
    },
    | _ => panic!("receive constructor must build a receive behavior"),
  }
}

#[test]
fn debug_prints_the_variant_name() {
  assert_eq!(format!("{:?}", Behaviors::same::<u32>()), "Same");
  assert_eq!(format!("{:?}", Behaviors::stopped::<u32>()), "Stopped");
  assert_eq!(format!("{:?}", Behaviors::receive(|_ctx, _m: u32| Ok(Behaviors::same()))), "Receive");
  assert_eq!(format!("{:?}", Behaviors::setup(|_ctx| Ok(Behaviors::stopped::<u32>()))), "Setup");
}
