use alloc::borrow::Cow;
use core::fmt;

/// Failure raised while applying a message or signal to a behavior.
///
/// Carries a human-readable description; the supervision layer outside this
/// core decides what to do with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorFailure {
  description: Cow<'static, str>,
}

impl ActorFailure {
  /// Creates a failure from a description.
  pub fn new(description: impl Into<Cow<'static, str>>) -> Self {
    Self { description: description.into() }
  }

  /// Returns the textual description of the failure.
  #[must_use]
  pub fn description(&self) -> &str {
    &self.description
  }

  /// Converts a caught panic payload into a failure value.
  #[cfg(feature = "unwind-supervision")]
  #[must_use]
  pub fn from_panic_payload(payload: &(dyn core::any::Any + Send)) -> Self {
    if let Some(message) = payload.downcast_ref::<&str>() {
      return Self::new(alloc::string::String::from(*message));
    }
    if let Some(message) = payload.downcast_ref::<alloc::string::String>() {
      return Self::new(message.clone());
    }
    Self::new("behavior panicked")
  }
}

impl fmt::Display for ActorFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.description)
  }
}
