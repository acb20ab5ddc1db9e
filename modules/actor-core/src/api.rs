//! Public API surface of the actor core.

/// Actor identities, references, behaviors, and spawning.
pub mod actor;
/// The task-execution contract mailbox run loops are scheduled on.
pub mod dispatcher;
/// The concurrent mailbox and its message types.
pub mod mailbox;
/// Mailbox and cell instrumentation events.
pub mod metrics;
/// Failure reporting towards an external supervisor.
pub mod supervision;
/// Reusable helpers for exercising the runtime in tests.
pub mod test_support;
