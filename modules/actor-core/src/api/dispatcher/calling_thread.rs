use super::{Dispatcher, Runnable};

#[cfg(test)]
mod tests;

/// Dispatcher that runs every task inline on the submitting thread.
///
/// Breaks the out-of-line execution expectation on purpose, which makes
/// message flow fully deterministic. Meant for unit tests and single-threaded
/// harnesses; production mailboxes belong on a pooled dispatcher. Reentering
/// the same mailbox is still impossible because the runner claim is held for
/// the duration of the inline run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallingThreadDispatcher;

impl Dispatcher for CallingThreadDispatcher {
  fn execute(&self, runnable: Runnable) {
    runnable.run();
  }
}
