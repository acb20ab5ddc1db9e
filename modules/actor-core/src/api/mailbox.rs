//! The concurrent mailbox and its message types.

mod base;
mod envelope;
mod mailbox_options;
mod system_message;

pub use base::Mailbox;
pub use envelope::Envelope;
pub use mailbox_options::{MailboxOptions, DEFAULT_MAX_RUN_LENGTH};
pub use system_message::SystemMessage;
