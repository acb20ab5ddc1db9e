//! Mailbox and cell instrumentation events.

use alloc::sync::Arc;
use core::fmt;

/// Instrumented runtime events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricsEvent {
  /// A message was accepted by a mailbox queue.
  MailboxEnqueued,
  /// A user message was dropped (closed mailbox or capacity rejection).
  UserMessageDropped,
  /// A system message was handled synchronously against a closed mailbox.
  SystemMessageHandledOnClosed,
  /// A message was passed to the cell for interpretation.
  MessageProcessed,
  /// A mailbox transitioned to closed.
  MailboxClosed,
}

/// Sink receiving instrumentation events from mailbox hot paths.
///
/// Implementations must be cheap and non-blocking; they run on producer and
/// runner threads alike.
pub trait MetricsSink: Send + Sync {
  /// Records one event.
  fn record(&self, event: MetricsEvent);
}

/// Shared handle to a [`MetricsSink`].
#[derive(Clone)]
pub struct MetricsSinkShared {
  inner: Arc<dyn MetricsSink>,
}

impl MetricsSinkShared {
  /// Wraps a sink implementation.
  pub fn new(sink: impl MetricsSink + 'static) -> Self {
    Self { inner: Arc::new(sink) }
  }

  /// Records one event.
  pub fn record(&self, event: MetricsEvent) {
    self.inner.record(event);
  }
}

impl fmt::Debug for MetricsSinkShared {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MetricsSinkShared").finish()
  }
}
