//! Dispatcher implementations.

mod thread_pool;
#[cfg(feature = "tokio")]
mod tokio_dispatcher;

pub use thread_pool::ThreadPoolDispatcher;
#[cfg(feature = "tokio")]
pub use tokio_dispatcher::TokioDispatcher;
