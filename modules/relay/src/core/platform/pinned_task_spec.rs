//! Parameters for creating a core-pinned task.

use super::{CoreId, TaskPriority};

/// Name, stack, priority and core affinity of a task to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedTaskSpec {
  name:       &'static str,
  stack_size: usize,
  priority:   TaskPriority,
  core:       CoreId,
}

impl PinnedTaskSpec {
  /// Creates a task specification.
  #[must_use]
  pub const fn new(name: &'static str, stack_size: usize, priority: TaskPriority, core: CoreId) -> Self {
    Self { name, stack_size, priority, core }
  }

  /// Returns the task name.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Returns the stack size in bytes.
  #[must_use]
  pub const fn stack_size(&self) -> usize {
    self.stack_size
  }

  /// Returns the task priority.
  #[must_use]
  pub const fn priority(&self) -> TaskPriority {
    self.priority
  }

  /// Returns the core the task must be pinned to.
  #[must_use]
  pub const fn core(&self) -> CoreId {
    self.core
  }
}
