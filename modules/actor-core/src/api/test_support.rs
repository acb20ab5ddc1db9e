//! Reusable helpers for exercising the runtime in tests.

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use crate::api::dispatcher::{Dispatcher, Runnable};
use crate::api::metrics::{MetricsEvent, MetricsSink};

/// Dispatcher that queues tasks until the test advances it explicitly.
///
/// Makes run-loop scheduling observable: every `execute` becomes one pending
/// task, and the test decides when each run happens.
#[derive(Clone, Default)]
pub struct ManualDispatcher {
  queue: Arc<Mutex<VecDeque<Runnable>>>,
}

impl ManualDispatcher {
  /// Creates an empty dispatcher.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of tasks waiting to run.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.queue.lock().len()
  }

  /// Runs the oldest pending task. Returns `false` when none was pending.
  pub fn step(&self) -> bool {
    let task = self.queue.lock().pop_front();
    match task {
      | Some(runnable) => {
        runnable.run();
        true
      },
      | None => false,
    }
  }

  /// Runs tasks until none are pending; returns how many ran.
  pub fn run_until_idle(&self) -> usize {
    let mut ran = 0;
    while self.step() {
      ran += 1;
    }
    ran
  }
}

impl Dispatcher for ManualDispatcher {
  fn execute(&self, runnable: Runnable) {
    self.queue.lock().push_back(runnable);
  }
}

/// Metrics sink that records every event for later assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
  events: Arc<Mutex<Vec<MetricsEvent>>>,
}

impl RecordingSink {
  /// Creates an empty sink.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of the recorded events.
  #[must_use]
  pub fn events(&self) -> Vec<MetricsEvent> {
    self.events.lock().clone()
  }

  /// Number of recorded events matching `event`.
  #[must_use]
  pub fn count(&self, event: MetricsEvent) -> usize {
    self.events.lock().iter().filter(|seen| **seen == event).count()
  }
}

impl MetricsSink for RecordingSink {
  fn record(&self, event: MetricsEvent) {
    self.events.lock().push(event);
  }
}
