//! Lifecycle phase of a relay record.

/// Lifecycle phase of a [`TickRelay`](super::TickRelay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TickRelayPhase {
  /// No dispatch task exists yet.
  Uninitialized = 0,
  /// An initializer is creating the task and registering the hook.
  Initializing  = 1,
  /// Task created and hook registered.
  Running       = 2,
  /// Task created but the hook could not be registered.
  Faulted       = 3,
}

impl TickRelayPhase {
  pub(crate) const fn as_u8(self) -> u8 {
    self as u8
  }

  pub(crate) const fn from_u8(raw: u8) -> Self {
    match raw {
      | 1 => Self::Initializing,
      | 2 => Self::Running,
      | 3 => Self::Faulted,
      | _ => Self::Uninitialized,
    }
  }
}
