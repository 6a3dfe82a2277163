//! Dispatch task configuration.


use crate::core::platform::CoreId;

/// Name, stack size and core of the dispatch task.
///
/// The tick hook is registered for the same core the task is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRelayConfig {
  task_name:  &'static str,
  stack_size: usize,
  core:       CoreId,
}

impl TickRelayConfig {
  /// Default dispatch task name.
  pub const DEFAULT_TASK_NAME: &'static str = "TickRelay";
  /// Default dispatch task stack size in bytes.
  pub const DEFAULT_STACK_SIZE: usize = 4096;
  /// Smallest stack size accepted by [`Self::with_stack_size`].
  pub const MIN_STACK_SIZE: usize = 1024;

  /// Creates the default configuration: task `TickRelay`, 4 KiB stack, core 0.
  #[must_use]
  pub const fn new() -> Self {
    Self { task_name: Self::DEFAULT_TASK_NAME, stack_size: Self::DEFAULT_STACK_SIZE, core: CoreId::new(0) }
  }

  /// Overrides the dispatch task name.
  #[must_use]
  pub const fn with_task_name(mut self, task_name: &'static str) -> Self {
    self.task_name = task_name;
    self
  }

  /// Overrides the dispatch task stack size, clamped to [`Self::MIN_STACK_SIZE`].
  #[must_use]
  pub const fn with_stack_size(mut self, stack_size: usize) -> Self {
    self.stack_size = if stack_size < Self::MIN_STACK_SIZE { Self::MIN_STACK_SIZE } else { stack_size };
    self
  }

  /// Overrides the core the task and hook are bound to.
  #[must_use]
  pub const fn with_core(mut self, core: CoreId) -> Self {
    self.core = core;
    self
  }

  /// Returns the dispatch task name.
  #[must_use]
  pub const fn task_name(&self) -> &'static str {
    self.task_name
  }

  /// Returns the dispatch task stack size in bytes.
  #[must_use]
  pub const fn stack_size(&self) -> usize {
    self.stack_size
  }

  /// Returns the bound core.
  #[must_use]
  pub const fn core(&self) -> CoreId {
    self.core
  }
}

impl Default for TickRelayConfig {
  fn default() -> Self {
    Self::new()
  }
}
