use kestrel_utils_core_rs::Element;

use crate::api::actor::Behavior;
use crate::api::mailbox::MailboxOptions;
use crate::api::metrics::MetricsSinkShared;
use crate::api::supervision::FailureEventListener;

/// Recipe for spawning an actor: initial behavior plus runtime wiring.
pub struct Props<M>
where
  M: Element, {
  behavior:         Behavior<M>,
  options:          MailboxOptions,
  failure_listener: Option<FailureEventListener>,
  metrics_sink:     Option<MetricsSinkShared>,
}

impl<M> Props<M>
where
  M: Element,
{
  /// Creates props from an initial behavior with default mailbox options.
  pub fn new(behavior: Behavior<M>) -> Self {
    Self { behavior, options: MailboxOptions::default(), failure_listener: None, metrics_sink: None }
  }

  /// Replaces the mailbox options.
  #[must_use]
  pub fn with_mailbox_options(mut self, options: MailboxOptions) -> Self {
    self.options = options;
    self
  }

  /// Installs the upward failure hook.
  #[must_use]
  pub fn with_failure_listener(mut self, listener: FailureEventListener) -> Self {
    self.failure_listener = Some(listener);
    self
  }

  /// Installs a metrics sink on the mailbox hot paths.
  #[must_use]
  pub fn with_metrics_sink(mut self, sink: MetricsSinkShared) -> Self {
    self.metrics_sink = Some(sink);
    self
  }

  pub(crate) fn into_parts(
    self,
  ) -> (Behavior<M>, MailboxOptions, Option<FailureEventListener>, Option<MetricsSinkShared>) {
    (self.behavior, self.options, self.failure_listener, self.metrics_sink)
  }
}
