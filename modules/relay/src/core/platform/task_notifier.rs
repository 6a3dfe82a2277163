//! Direct-to-task notification primitive.

use super::TaskHandle;

/// Interrupt-safe, single-slot wake signal targeting one task.
///
/// Mirrors `vTaskNotifyGiveFromISR` / `ulTaskNotifyTake(pdTRUE, portMAX_DELAY)`.
pub trait TaskNotifier: Send + Sync {
  /// Signals `task` from interrupt context.
  ///
  /// Must not block, allocate or log. Returns `true` when the notification made a
  /// task runnable that has a higher priority than the interrupted one.
  fn notify_from_isr(&self, task: TaskHandle) -> bool;

  /// Requests a context switch on interrupt exit.
  fn yield_from_isr(&self);

  /// Blocks the calling task until at least one notification is pending, then
  /// clears them all.
  ///
  /// Returns the number of notifications consumed. Zero means the wait ended
  /// without a notification.
  fn wait_for_notification(&self) -> u32;
}
