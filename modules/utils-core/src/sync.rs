//! Shared synchronization helpers.

mod flag;

pub use flag::Flag;
