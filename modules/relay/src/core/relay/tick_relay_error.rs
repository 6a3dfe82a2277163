//! Tick relay error types.

use core::fmt;

/// Errors that can occur while bringing a tick relay up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRelayError {
  /// The RTOS could not create the dispatch task.
  TaskCreateFailed,
  /// Task creation reported success without a task handle.
  NullTaskHandle,
  /// The tick hook could not be registered for the configured core.
  HookRegistrationFailed,
}

impl fmt::Display for TickRelayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::TaskCreateFailed => write!(f, "failed to create tick dispatch task"),
      | Self::NullTaskHandle => write!(f, "tick dispatch task was created without a handle"),
      | Self::HookRegistrationFailed => write!(f, "failed to register tick hook"),
    }
  }
}
