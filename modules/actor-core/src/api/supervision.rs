//! Failure reporting towards an external supervisor.

mod failure_event_listener;
mod failure_info;

pub use failure_event_listener::FailureEventListener;
pub use failure_info::FailureInfo;
