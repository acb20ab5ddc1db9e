use crate::api::actor::ActorPath;

/// Actor lifecycle signals delivered to a behavior's signal handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
  /// Signal sent after the actor stops.
  PostStop,
  /// A previously watched actor terminated.
  Terminated(ActorPath),
}
