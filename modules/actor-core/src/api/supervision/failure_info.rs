use crate::api::actor::{ActorFailure, ActorPath};

/// Failure information reported through the supervision hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureInfo {
  /// Path of the actor where the failure occurred.
  pub path: ActorPath,
  /// The failure payload.
  pub failure: ActorFailure,
}

impl FailureInfo {
  /// Creates new failure information.
  #[must_use]
  pub const fn new(path: ActorPath, failure: ActorFailure) -> Self {
    Self { path, failure }
  }

  /// Returns a textual description suitable for logging.
  #[must_use]
  pub fn description(&self) -> &str {
    self.failure.description()
  }
}
