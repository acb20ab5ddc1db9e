//! no_std-friendly collection primitives shared between runtimes.

mod element;
/// Queue primitives: errors, sizing, traits, and the MPSC queue.
pub mod queue;

pub use element::Element;
pub use queue::{MpscQueue, OfferOutcome, OverflowPolicy, QueueBase, QueueError, QueueRw, QueueSize};
