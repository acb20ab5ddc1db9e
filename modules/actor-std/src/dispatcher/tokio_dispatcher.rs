use kestrel_actor_core_rs::{Dispatcher, Runnable};
use tokio::runtime::Handle;

/// Dispatcher that schedules mailbox runs as tasks on a Tokio runtime.
///
/// A mailbox run is short and bounded by its run length, so it is acceptable
/// as an ordinary task on a multi-threaded runtime. Actors doing heavier
/// synchronous work per message belong on a [`super::ThreadPoolDispatcher`].
#[derive(Clone, Debug)]
pub struct TokioDispatcher {
  handle: Handle,
}

impl TokioDispatcher {
  /// Wraps an explicit runtime handle.
  #[must_use]
  pub fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Uses the runtime of the calling context.
  ///
  /// # Panics
  /// Panics outside of a Tokio runtime, like [`Handle::current`].
  #[must_use]
  pub fn current() -> Self {
    Self { handle: Handle::current() }
  }
}

impl Dispatcher for TokioDispatcher {
  fn execute(&self, runnable: Runnable) {
    self.handle.spawn(async move { runnable.run() });
  }
}
