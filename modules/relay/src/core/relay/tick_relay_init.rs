//! Outcome of an initialization request.

use crate::core::platform::TaskHandle;

/// What an `initialize` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRelayInit {
  /// This call created the dispatch task and registered the hook.
  Started(TaskHandle),
  /// The relay was already running; nothing changed.
  AlreadyRunning(TaskHandle),
  /// Another caller is initializing the relay right now; nothing changed.
  InProgress,
}

impl TickRelayInit {
  /// Returns the dispatch task handle, if one exists yet.
  #[must_use]
  pub const fn handle(&self) -> Option<TaskHandle> {
    match self {
      | Self::Started(handle) | Self::AlreadyRunning(handle) => Some(*handle),
      | Self::InProgress => None,
    }
  }

  /// Returns `true` when this call performed the initialization.
  #[must_use]
  pub const fn is_started(&self) -> bool {
    matches!(self, Self::Started(_))
  }
}
