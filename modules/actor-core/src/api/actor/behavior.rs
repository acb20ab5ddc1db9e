use alloc::boxed::Box;

use kestrel_utils_core_rs::Element;

use crate::api::actor::{ActorFailure, Context, Signal};

#[cfg(test)]
mod tests;

/// Message handler signature for [`Behaviors::receive`].
pub type ReceiveFn<M> =
  dyn for<'a> FnMut(&mut Context<'a, M>, M) -> Result<Behavior<M>, ActorFailure> + Send + 'static;

/// Signal handler signature for [`Behaviors::receive_with_signal`].
pub type SignalFn<M> =
  dyn for<'a> FnMut(&mut Context<'a, M>, Signal) -> Result<Behavior<M>, ActorFailure> + Send + 'static;

/// Deferred construction signature for [`Behaviors::setup`].
pub type SetupFn<M> =
  dyn for<'a> FnOnce(&mut Context<'a, M>) -> Result<Behavior<M>, ActorFailure> + Send + 'static;

/// Message-receiving behavior with an optional signal handler.
pub struct Receive<M>
where
  M: Element, {
  on_message: Box<ReceiveFn<M>>,
  on_signal:  Option<Box<SignalFn<M>>>,
}

impl<M> Receive<M>
where
  M: Element,
{
  pub(crate) fn apply_message(&mut self, ctx: &mut Context<'_, M>, message: M) -> Result<Behavior<M>, ActorFailure> {
    (self.on_message)(ctx, message)
  }

  pub(crate) fn apply_signal(&mut self, ctx: &mut Context<'_, M>, signal: Signal) -> Result<Behavior<M>, ActorFailure> {
    match self.on_signal.as_mut() {
      | Some(handler) => handler(ctx, signal),
      | None => Ok(Behavior::Same),
    }
  }
}

/// Interpretable state of an actor.
///
/// Behavior replacement is how actor state evolves: every handled message
/// returns the behavior that interprets the next one. `Same` keeps the
/// current behavior installed, `Stopped` terminates the actor.
pub enum Behavior<M>
where
  M: Element, {
  /// Behavior constructed on `Start`, before the first message.
  Setup(Box<SetupFn<M>>),
  /// Behavior handling messages and, optionally, lifecycle signals.
  Receive(Receive<M>),
  /// Keeps the previously installed behavior.
  Same,
  /// Terminates the actor.
  Stopped,
}

impl<M> core::fmt::Debug for Behavior<M>
where
  M: Element,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let name = match self {
      | Behavior::Setup(_) => "Setup",
      | Behavior::Receive(_) => "Receive",
      | Behavior::Same => "Same",
      | Behavior::Stopped => "Stopped",
    };
    f.write_str(name)
  }
}

/// Factory functions for [`Behavior`] values.
pub struct Behaviors;

impl Behaviors {
  /// Defers behavior construction until the actor has started.
  ///
  /// The closure runs once, on the actor's own execution context, and must
  /// return a concrete behavior (`same` is not a valid first behavior).
  pub fn setup<M, F>(f: F) -> Behavior<M>
  where
    M: Element,
    F: for<'a> FnOnce(&mut Context<'a, M>) -> Result<Behavior<M>, ActorFailure> + Send + 'static, {
    Behavior::Setup(Box::new(f))
  }

  /// Creates a behavior from a message handler.
  pub fn receive<M, F>(f: F) -> Behavior<M>
  where
    M: Element,
    F: for<'a> FnMut(&mut Context<'a, M>, M) -> Result<Behavior<M>, ActorFailure> + Send + 'static, {
    Behavior::Receive(Receive { on_message: Box::new(f), on_signal: None })
  }

  /// Creates a behavior from a message handler and a signal handler.
  pub fn receive_with_signal<M, F, S>(f: F, s: S) -> Behavior<M>
  where
    M: Element,
    F: for<'a> FnMut(&mut Context<'a, M>, M) -> Result<Behavior<M>, ActorFailure> + Send + 'static,
    S: for<'a> FnMut(&mut Context<'a, M>, Signal) -> Result<Behavior<M>, ActorFailure> + Send + 'static, {
    Behavior::Receive(Receive { on_message: Box::new(f), on_signal: Some(Box::new(s)) })
  }

  /// Keeps the current behavior.
  #[must_use]
  pub fn same<M>() -> Behavior<M>
  where
    M: Element, {
    Behavior::Same
  }

  /// Stops the actor.
  #[must_use]
  pub fn stopped<M>() -> Behavior<M>
  where
    M: Element, {
    Behavior::Stopped
  }
}
