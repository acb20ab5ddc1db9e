//! kestrel-utils-core-rs
//!
//! Collection and synchronization primitives shared by the kestrel actor
//! runtime. Everything in this crate is `no_std` + `alloc` friendly so the
//! same queue code backs both hosted and constrained targets.

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Queue and element primitives.
pub mod collections;
/// Shared synchronization helpers.
pub mod sync;

pub use collections::{Element, MpscQueue, OfferOutcome, OverflowPolicy, QueueBase, QueueError, QueueRw, QueueSize};
pub use sync::Flag;
