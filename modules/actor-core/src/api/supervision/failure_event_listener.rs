use alloc::sync::Arc;
use core::fmt;

use crate::api::supervision::FailureInfo;

/// Callback invoked when a cell transitions to `Failed`.
///
/// This is the single escalation hook towards supervision; the policy that
/// reacts to the failure (restart, stop, escalate) lives entirely outside
/// this core. The callback runs on the thread that interpreted the failing
/// message, so it must be cheap and must not block.
#[derive(Clone)]
pub struct FailureEventListener {
  inner: Arc<dyn Fn(FailureInfo) + Send + Sync>,
}

impl FailureEventListener {
  /// Wraps a callback.
  pub fn new(listener: impl Fn(FailureInfo) + Send + Sync + 'static) -> Self {
    Self { inner: Arc::new(listener) }
  }

  /// Invokes the callback with the failure information.
  pub fn notify(&self, info: FailureInfo) {
    (self.inner)(info);
  }
}

impl fmt::Debug for FailureEventListener {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FailureEventListener").finish()
  }
}
