//! Platform whose ticks and task scheduling are driven by hand.

use alloc::vec::Vec;

use portable_atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use spin::Mutex;

use crate::core::{
  platform::{
    CoreId, PinnedTaskSpec, TaskEntry, TaskHandle, TaskNotifier, TaskSpawner, TickHookHandler, TickHookRegistrar,
  },
  relay::TickRelayError,
  signal::TickSignal,
};

/// Platform that never runs the dispatch task.
///
/// Tests fire hardware ticks with [`Self::fire_tick`] and play the scheduler by
/// calling `TickRelay::dispatch_next`, which consumes whatever is pending
/// without blocking.
pub struct ManualTickPlatform {
  signal:      TickSignal,
  next_handle: AtomicUsize,
  notified:    AtomicUsize,
  yields:      AtomicU32,
  preempts:    AtomicBool,
  fail_spawn:  AtomicBool,
  fail_hook:   AtomicBool,
  spawned:     Mutex<Vec<(TaskHandle, PinnedTaskSpec)>>,
  hooks:       Mutex<Vec<(CoreId, TickHookHandler)>>,
}

impl ManualTickPlatform {
  /// Creates a platform with no tasks and no hooks.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      signal:      TickSignal::new(),
      next_handle: AtomicUsize::new(1),
      notified:    AtomicUsize::new(0),
      yields:      AtomicU32::new(0),
      preempts:    AtomicBool::new(true),
      fail_spawn:  AtomicBool::new(false),
      fail_hook:   AtomicBool::new(false),
      spawned:     Mutex::new(Vec::new()),
      hooks:       Mutex::new(Vec::new()),
    }
  }

  /// Simulates one hardware tick on `core`, running every hook bound to it.
  pub fn fire_tick(&self, core: CoreId) {
    let handlers: Vec<TickHookHandler> =
      self.hooks.lock().iter().filter(|(bound, _)| *bound == core).map(|(_, handler)| *handler).collect();
    for handler in handlers {
      unsafe { handler.invoke() };
    }
  }

  /// Makes the next task creation fail.
  pub fn fail_next_spawn(&self) {
    self.fail_spawn.store(true, Ordering::Release);
  }

  /// Makes every hook registration fail.
  pub fn fail_hook_registration(&self) {
    self.fail_hook.store(true, Ordering::Release);
  }

  /// Controls whether a notification reports a higher-priority wake.
  pub fn set_preempts(&self, preempts: bool) {
    self.preempts.store(preempts, Ordering::Release);
  }

  /// Returns the specifications of every task created so far.
  #[must_use]
  pub fn spawned_tasks(&self) -> Vec<(TaskHandle, PinnedTaskSpec)> {
    self.spawned.lock().clone()
  }

  /// Returns the cores hooks were registered for, in registration order.
  #[must_use]
  pub fn hook_cores(&self) -> Vec<CoreId> {
    self.hooks.lock().iter().map(|(core, _)| *core).collect()
  }

  /// Returns the task targeted by the most recent notification.
  #[must_use]
  pub fn last_notified(&self) -> Option<TaskHandle> {
    TaskHandle::from_raw(self.notified.load(Ordering::Acquire))
  }

  /// Returns the number of reschedules requested from the hook.
  #[must_use]
  pub fn yield_requests(&self) -> u32 {
    self.yields.load(Ordering::Acquire)
  }

  /// Returns the number of notifications not yet consumed.
  #[must_use]
  pub fn pending_notifications(&self) -> u32 {
    self.signal.pending()
  }
}

impl Default for ManualTickPlatform {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskNotifier for ManualTickPlatform {
  fn notify_from_isr(&self, task: TaskHandle) -> bool {
    self.notified.store(task.as_raw(), Ordering::Release);
    self.signal.notify() && self.preempts.load(Ordering::Acquire)
  }

  fn yield_from_isr(&self) {
    self.yields.fetch_add(1, Ordering::AcqRel);
  }

  fn wait_for_notification(&self) -> u32 {
    self.signal.take()
  }
}

impl TaskSpawner for ManualTickPlatform {
  fn create_pinned_task(&self, _entry: TaskEntry, spec: &PinnedTaskSpec) -> Result<TaskHandle, TickRelayError> {
    if self.fail_spawn.swap(false, Ordering::AcqRel) {
      return Err(TickRelayError::TaskCreateFailed);
    }
    let handle = TaskHandle::from_raw(self.next_handle.fetch_add(1, Ordering::AcqRel))
      .ok_or(TickRelayError::NullTaskHandle)?;
    self.spawned.lock().push((handle, *spec));
    Ok(handle)
  }
}

impl TickHookRegistrar for ManualTickPlatform {
  fn register_tick_hook(&self, handler: TickHookHandler, core: CoreId) -> Result<(), TickRelayError> {
    if self.fail_hook.load(Ordering::Acquire) {
      return Err(TickRelayError::HookRegistrationFailed);
    }
    self.hooks.lock().push((core, handler));
    Ok(())
  }
}
