use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_queue::SegQueue;
use kestrel_actor_core_rs::{Dispatcher, Runnable};


struct Shared {
  injector: SegQueue<Runnable>,
  lock:     Mutex<()>,
  parked:   Condvar,
  shutdown: AtomicBool,
}

/// Dispatcher backed by a fixed pool of dedicated worker threads.
///
/// Tasks go through a lock-free injector queue; workers park on a condvar
/// when the queue runs dry. Every accepted task is eventually run: dropping
/// the dispatcher drains the queue before joining the workers.
///
/// The pool makes no attempt to serialize tasks; mailboxes already guarantee
/// that at most one run per mailbox is in flight, so worker threads only ever
/// race on runs of distinct mailboxes.
pub struct ThreadPoolDispatcher {
  shared:  Arc<Shared>,
  workers: Vec<JoinHandle<()>>,
}

impl ThreadPoolDispatcher {
  /// Creates a pool with the given number of worker threads (at least one).
  #[must_use]
  pub fn new(workers: usize) -> Self {
    let shared = Arc::new(Shared {
      injector: SegQueue::new(),
      lock:     Mutex::new(()),
      parked:   Condvar::new(),
      shutdown: AtomicBool::new(false),
    });
    let workers = (0..workers.max(1))
      .map(|index| {
        let shared = Arc::clone(&shared);
        thread::Builder::new()
          .name(format!("kestrel-worker-{index}"))
          .spawn(move || worker_loop(&shared))
          .expect("failed to spawn worker thread")
      })
      .collect();
    Self { shared, workers }
  }

  /// Creates a pool sized to the machine's available parallelism.
  #[must_use]
  pub fn with_default_parallelism() -> Self {
    let workers = thread::available_parallelism().map(|count| count.get()).unwrap_or(4);
    Self::new(workers)
  }

  /// Number of tasks accepted but not yet picked up by a worker.
  #[must_use]
  pub fn backlog(&self) -> usize {
    self.shared.injector.len()
  }
}

fn worker_loop(shared: &Shared) {
  loop {
    if let Some(task) = shared.injector.pop() {
      task.run();
      continue;
    }
    if shared.shutdown.load(Ordering::Acquire) {
      return;
    }
    let Ok(guard) = shared.lock.lock() else {
      return;
    };
    // re-check under the lock so a submit between pop and park is not lost
    if !shared.injector.is_empty() || shared.shutdown.load(Ordering::Acquire) {
      continue;
    }
    let _guard = shared.parked.wait(guard);
  }
}

impl Dispatcher for ThreadPoolDispatcher {
  fn execute(&self, runnable: Runnable) {
    self.shared.injector.push(runnable);
    // taking the lock orders this submit against a worker's park decision
    drop(self.shared.lock.lock());
    self.shared.parked.notify_one();
  }
}

impl Drop for ThreadPoolDispatcher {
  fn drop(&mut self) {
    self.shared.shutdown.store(true, Ordering::Release);
    drop(self.shared.lock.lock());
    self.shared.parked.notify_all();
    // the last mailbox ref, and with it this pool, can be released from a
    // worker; that worker must not join itself and exits on its own
    let current = thread::current().id();
    for handle in self.workers.drain(..) {
      if handle.thread().id() != current {
        let _ = handle.join();
      }
    }
  }
}

impl core::fmt::Debug for ThreadPoolDispatcher {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ThreadPoolDispatcher").field("workers", &self.workers.len()).finish()
  }
}
