use kestrel_utils_core_rs::Element;

use crate::api::actor::{ActorPath, ActorRef, Props};
use crate::api::dispatcher::DispatcherRef;
use crate::api::mailbox::{Mailbox, SystemMessage};

/// Creates an actor from `props` under `path`, scheduling its run loops on
/// `dispatcher`.
///
/// The cell starts in the `Starting` state; the enqueued `Start` message runs
/// any deferred setup before the first user message is interpreted. The
/// returned ref is immediately usable from any thread.
pub fn spawn<M>(path: ActorPath, props: Props<M>, dispatcher: DispatcherRef) -> ActorRef<M>
where
  M: Element, {
  let (behavior, options, failure_listener, metrics_sink) = props.into_parts();
  let mailbox = Mailbox::create(path.clone(), behavior, options, dispatcher, failure_listener, metrics_sink);
  mailbox.send_system_message(SystemMessage::Start);
  ActorRef::new(path, mailbox)
}
