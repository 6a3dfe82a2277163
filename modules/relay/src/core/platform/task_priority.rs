//! RTOS task priority value.

/// Priority handed to the RTOS when the dispatch task is created.
///
/// Higher values preempt lower ones, as in FreeRTOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TaskPriority(u32);

impl TaskPriority {
  /// Creates a priority value.
  #[must_use]
  pub const fn new(value: u32) -> Self {
    Self(value)
  }

  /// Returns the raw priority value.
  #[must_use]
  pub const fn as_u32(self) -> u32 {
    self.0
  }
}
