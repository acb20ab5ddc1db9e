//! Actor identities, references, behaviors, and spawning.

mod actor_failure;
mod actor_path;
pub(crate) mod actor_ref;
mod behavior;
mod context;
mod props;
mod signal;
mod spawn;

pub use actor_failure::ActorFailure;
pub use actor_path::ActorPath;
pub use actor_ref::{ActorRef, SystemActorRef, SystemMessageSender};
pub use behavior::{Behavior, Behaviors, Receive};
pub use context::Context;
pub use props::Props;
pub use signal::Signal;
pub use spawn::spawn;
