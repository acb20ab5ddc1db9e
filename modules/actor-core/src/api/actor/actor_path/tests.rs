use super::*;
use alloc::format;

#[test]
fn child_and_parent_are_inverse() {
  let worker = ActorPath::root().child("user").child("worker-3");

  assert_eq!(worker.name(), "worker-3");
  assert_eq!(worker.depth(), 2);

  let parent = worker.parent().unwrap();
  assert_eq!(parent.name(), "user");
  assert_eq!(parent.parent().unwrap(), ActorPath::root());
  assert!(ActorPath::root().parent().is_none());
}

#[test]
fn display_renders_slash_separated_segments() {
  assert_eq!(format!("{}", ActorPath::root()), "/");
  assert_eq!(format!("{}", ActorPath::root().child("user").child("a")), "/user/a");
}

#[test]
fn equality_is_structural() {
  let a = ActorPath::root().child("user").child("a");
  let b = ActorPath::root().child("user").child("a");

  assert_eq!(a, b);
  assert_ne!(a, a.parent().unwrap());
}
