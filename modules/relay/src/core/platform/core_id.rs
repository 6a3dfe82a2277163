//! Processor core identifier.

use core::fmt;

/// Identifies the processor core a task or interrupt hook is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CoreId(u8);

impl CoreId {
  /// Creates a core identifier.
  #[must_use]
  pub const fn new(index: u8) -> Self {
    Self(index)
  }

  /// Returns the zero-based core index.
  #[must_use]
  pub const fn index(self) -> u8 {
    self.0
  }
}

impl fmt::Display for CoreId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "core{}", self.0)
  }
}
