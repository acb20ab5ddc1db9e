use core::fmt::Debug;

/// Fundamental constraints for elements that can travel through the runtime's queues.
///
/// On targets with atomic pointer support we demand `Send + Sync` so elements can cross
/// threads freely. On single-threaded targets only `Debug + 'static` is required, which
/// keeps `Rc`-based payloads usable there.
#[cfg(target_has_atomic = "ptr")]
pub trait Element: Debug + Send + Sync + 'static {}

#[cfg(target_has_atomic = "ptr")]
impl<T> Element for T where T: Debug + Send + Sync + 'static {}

/// Element constraints for single-threaded targets.
#[cfg(not(target_has_atomic = "ptr"))]
pub trait Element: Debug + 'static {}

#[cfg(not(target_has_atomic = "ptr"))]
impl<T> Element for T where T: Debug + 'static {}
