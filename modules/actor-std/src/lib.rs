//! kestrel-actor-std-rs
//!
//! std-only companions to `kestrel-actor-core-rs`: dispatchers backed by a
//! dedicated worker-thread pool or by a Tokio runtime. The crate also hosts
//! the runtime's cross-thread integration tests, which need real parallelism
//! the core's deterministic test dispatcher cannot provide.

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

/// Dispatcher implementations.
pub mod dispatcher;

pub use dispatcher::ThreadPoolDispatcher;
#[cfg(feature = "tokio")]
pub use dispatcher::TokioDispatcher;
