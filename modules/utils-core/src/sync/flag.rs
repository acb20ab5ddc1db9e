use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};


/// Cheaply clonable boolean flag shared between handles.
///
/// Clones observe each other's updates; the flag is one-way in practice
/// (callers in this runtime only ever raise it) but nothing enforces that.
#[derive(Clone, Debug, Default)]
pub struct Flag {
  inner: Arc<AtomicBool>,
}

impl Flag {
  /// Creates a flag with the given initial value.
  #[must_use]
  pub fn new(value: bool) -> Self {
    Self { inner: Arc::new(AtomicBool::new(value)) }
  }

  /// Reads the current value.
  #[must_use]
  pub fn get(&self) -> bool {
    self.inner.load(Ordering::Acquire)
  }

  /// Stores a new value.
  pub fn set(&self, value: bool) {
    self.inner.store(value, Ordering::Release);
  }
}
