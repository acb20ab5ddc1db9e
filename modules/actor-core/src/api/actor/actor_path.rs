use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

#[cfg(test)]
mod tests;

/// Unique, hierarchical, immutable actor identity.
///
/// A path is a sequence of segments below the root; `/user/worker-3` names the
/// actor `worker-3` spawned under `user`. Paths are cheap to clone, segments
/// are shared between a path and the paths derived from it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ActorPath {
  segments: Arc<[Arc<str>]>,
}

impl ActorPath {
  /// Returns the root path `/`.
  #[must_use]
  pub fn root() -> Self {
    Self { segments: Arc::from(Vec::new()) }
  }

  /// Derives a child path with the given segment name.
  #[must_use]
  pub fn child(&self, name: &str) -> Self {
    let mut segments: Vec<Arc<str>> = self.segments.to_vec();
    segments.push(Arc::from(name));
    Self { segments: Arc::from(segments) }
  }

  /// Returns the parent path, or `None` for the root.
  #[must_use]
  pub fn parent(&self) -> Option<Self> {
    match self.segments.split_last() {
      | Some((_, rest)) => Some(Self { segments: Arc::from(rest.to_vec()) }),
      | None => None,
    }
  }

  /// Returns the last segment, or `/` for the root.
  #[must_use]
  pub fn name(&self) -> &str {
    match self.segments.last() {
      | Some(segment) => segment,
      | None => "/",
    }
  }

  /// Checks whether this is the root path.
  #[must_use]
  pub fn is_root(&self) -> bool {
    self.segments.is_empty()
  }

  /// Returns the number of segments below the root.
  #[must_use]
  pub fn depth(&self) -> usize {
    self.segments.len()
  }
}

impl fmt::Display for ActorPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.segments.is_empty() {
      return f.write_str("/");
    }
    for segment in self.segments.iter() {
      write!(f, "/{segment}")?;
    }
    Ok(())
  }
}

impl fmt::Debug for ActorPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ActorPath({self})")
  }
}
