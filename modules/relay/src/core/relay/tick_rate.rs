//! Time-event rate group selector.

use core::fmt;

/// Selects which rate group of the time-event engine a relay services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TickRate(u8);

impl TickRate {
  /// The primary rate group.
  pub const DEFAULT: Self = Self(0);

  /// Creates a rate selector.
  #[must_use]
  pub const fn new(rate: u8) -> Self {
    Self(rate)
  }

  /// Returns the raw rate index.
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self.0
  }
}

impl fmt::Display for TickRate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "rate{}", self.0)
  }
}
