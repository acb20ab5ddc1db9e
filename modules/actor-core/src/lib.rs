//! kestrel-actor-core-rs
//!
//! Runtime core of the kestrel actor library: the dual-queue mailbox with its
//! atomic status word, the actor cell that interprets messages against a
//! replaceable behavior, the dispatcher contract the mailbox schedules its run
//! loop on, and the death-watch protocol tying the three together.
//!
//! # Key Features
//! - Non-blocking multi-producer sends with reject-and-drop overflow handling
//! - Prioritized system messages (`Start`, `Watch`, `Stop`, ...) that are never
//!   starved by user traffic
//! - Single-active-runner mailbox scheduling on an opaque [`Dispatcher`]
//! - Death watch with a synthesized `Terminated` answer for watches that race
//!   against termination
//!
//! # Example Usage
//! ```ignore
//! use kestrel_actor_core_rs::*;
//!
//! let behavior = Behaviors::receive(|_ctx, message: u32| {
//!     // handle the message, keep the same behavior
//!     Ok(Behaviors::same())
//! });
//! let actor = spawn(ActorPath::root().child("counter"), Props::new(behavior), dispatcher);
//! actor.tell(42);
//! ```

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unreachable)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::needless_borrow)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Public API for actors, mailboxes, and dispatchers.
pub mod api;
/// Internal implementation details.
pub mod internal;

pub use api::actor::{
  spawn, ActorFailure, ActorPath, ActorRef, Behavior, Behaviors, Context, Props, Signal, SystemActorRef,
  SystemMessageSender,
};
pub use api::dispatcher::{CallingThreadDispatcher, Dispatcher, DispatcherRef, Runnable};
pub use api::mailbox::{Envelope, Mailbox, MailboxOptions, SystemMessage, DEFAULT_MAX_RUN_LENGTH};
pub use api::metrics::{MetricsEvent, MetricsSink, MetricsSinkShared};
pub use api::supervision::{FailureEventListener, FailureInfo};
