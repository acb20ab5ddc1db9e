//! The task-execution contract mailbox run loops are scheduled on.

mod calling_thread;

use alloc::boxed::Box;
use alloc::sync::Arc;

pub use calling_thread::CallingThreadDispatcher;

/// Opaque unit of work handed to a [`Dispatcher`].
pub struct Runnable {
  task: Box<dyn FnOnce() + Send + 'static>,
}

impl Runnable {
  /// Wraps a closure as a schedulable task.
  pub fn new(task: impl FnOnce() + Send + 'static) -> Self {
    Self { task: Box::new(task) }
  }

  /// Executes the task, consuming it.
  pub fn run(self) {
    (self.task)()
  }
}

impl core::fmt::Debug for Runnable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Runnable").finish()
  }
}

/// Abstract task executor the mailbox schedules its run loop on.
///
/// Implementations must eventually run every accepted task and must execute
/// tasks out-of-line with respect to the submitting thread; concurrency
/// across distinct tasks is expected. Serializing runs of one mailbox is the
/// mailbox's own job, enforced through its status word, never the
/// dispatcher's.
pub trait Dispatcher: Send + Sync + 'static {
  /// Schedules a task for eventual execution.
  fn execute(&self, runnable: Runnable);
}

/// Shared handle to a dispatcher.
pub type DispatcherRef = Arc<dyn Dispatcher>;
