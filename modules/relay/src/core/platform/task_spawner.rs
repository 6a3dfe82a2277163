//! Task-creation facility.

use super::{PinnedTaskSpec, TaskEntry, TaskHandle};
use crate::core::relay::TickRelayError;

/// Creates RTOS tasks pinned to a fixed core.
pub trait TaskSpawner: Send + Sync {
  /// Creates and starts a task running `entry` with the given specification.
  ///
  /// # Errors
  ///
  /// Returns [`TickRelayError::TaskCreateFailed`] when the RTOS could not allocate
  /// the task and [`TickRelayError::NullTaskHandle`] when it reported success
  /// without producing a handle.
  fn create_pinned_task(&self, entry: TaskEntry, spec: &PinnedTaskSpec) -> Result<TaskHandle, TickRelayError>;
}
