//! Identity attached to trace records produced for relayed ticks.

/// Passive tag telling the trace layer which driver produced a tick.
///
/// Only handed to the engine when the `trace` feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceSenderId(u16);

impl TraceSenderId {
  /// Identity used by relays unless overridden.
  pub const TICK_HOOK: Self = Self(0);

  /// Creates a sender identity.
  #[must_use]
  pub const fn new(id: u16) -> Self {
    Self(id)
  }

  /// Returns the raw identity value.
  #[must_use]
  pub const fn as_u16(self) -> u16 {
    self.0
  }
}
