//! Thread-backed platform for running relays on a host OS.

extern crate std;


use alloc::{sync::Arc, vec::Vec};
use std::{
  cell::RefCell,
  sync::{PoisonError, RwLock},
  thread,
};

use spin::Mutex;
use tracing::{debug, info, warn};

use crate::core::{
  platform::{
    CoreId, PinnedTaskSpec, TaskEntry, TaskHandle, TaskNotifier, TaskSpawner, TickHookHandler, TickHookRegistrar,
  },
  relay::TickRelayError,
  signal::TickSignal,
};

std::thread_local! {
  static CURRENT_SIGNAL: RefCell<Option<Arc<TickSignal>>> = const { RefCell::new(None) };
}

/// Simulates a multi-core RTOS with OS threads.
///
/// Each task is a named thread owning a [`TickSignal`]; hardware ticks are
/// simulated by calling [`Self::fire_tick`], directly or through a
/// [`StdTickSource`](super::StdTickSource). Task priority and core affinity are
/// recorded in the logs but not enforced by the host scheduler.
pub struct StdTickPlatform {
  cores: u8,
  tasks: RwLock<Vec<Arc<TickSignal>>>,
  hooks: Mutex<Vec<(CoreId, TickHookHandler)>>,
}

impl StdTickPlatform {
  /// Number of simulated cores unless overridden.
  pub const DEFAULT_CORES: u8 = 2;
  /// Hook slots available per core.
  pub const MAX_HOOKS_PER_CORE: usize = 8;
  /// Smallest stack given to a task thread.
  pub const MIN_THREAD_STACK: usize = 64 * 1024;

  /// Creates a dual-core platform.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_cores(Self::DEFAULT_CORES)
  }

  /// Creates a platform simulating `cores` cores.
  #[must_use]
  pub const fn with_cores(cores: u8) -> Self {
    Self { cores, tasks: RwLock::new(Vec::new()), hooks: Mutex::new(Vec::new()) }
  }

  /// Returns the number of simulated cores.
  #[must_use]
  pub const fn cores(&self) -> u8 {
    self.cores
  }

  /// Simulates one hardware tick interrupt on `core`.
  ///
  /// The hooks run after the hook table is unlocked, so a hook may register
  /// further hooks.
  pub fn fire_tick(&self, core: CoreId) {
    let handlers: Vec<TickHookHandler> =
      self.hooks.lock().iter().filter(|(bound, _)| *bound == core).map(|(_, handler)| *handler).collect();
    for handler in handlers {
      unsafe { handler.invoke() };
    }
  }

  /// Returns the number of hooks registered for `core`.
  #[must_use]
  pub fn hook_count(&self, core: CoreId) -> usize {
    self.hooks.lock().iter().filter(|(bound, _)| *bound == core).count()
  }

  const fn has_core(&self, core: CoreId) -> bool {
    core.index() < self.cores
  }

  fn signal_of(&self, task: TaskHandle) -> Option<Arc<TickSignal>> {
    let tasks = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
    tasks.get(task.as_raw() - 1).cloned()
  }
}

impl Default for StdTickPlatform {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskNotifier for StdTickPlatform {
  fn notify_from_isr(&self, task: TaskHandle) -> bool {
    self.signal_of(task).is_some_and(|signal| signal.notify())
  }

  fn yield_from_isr(&self) {
    thread::yield_now();
  }

  fn wait_for_notification(&self) -> u32 {
    let Some(signal) = CURRENT_SIGNAL.with(|current| current.borrow().clone()) else {
      warn!("wait_for_notification called outside a platform task");
      return 0;
    };
    futures::executor::block_on(signal.wait())
  }
}

impl TaskSpawner for StdTickPlatform {
  fn create_pinned_task(&self, entry: TaskEntry, spec: &PinnedTaskSpec) -> Result<TaskHandle, TickRelayError> {
    if !self.has_core(spec.core()) {
      warn!(task = spec.name(), core = %spec.core(), cores = self.cores, "task pinned to a core that does not exist");
      return Err(TickRelayError::TaskCreateFailed);
    }

    let signal = Arc::new(TickSignal::new());
    let task_signal = signal.clone();
    let spawned = thread::Builder::new()
      .name(spec.name().into())
      .stack_size(spec.stack_size().max(Self::MIN_THREAD_STACK))
      .spawn(move || {
        CURRENT_SIGNAL.with(|current| *current.borrow_mut() = Some(task_signal));
        unsafe { entry.run() };
      });
    if let Err(err) = spawned {
      warn!(task = spec.name(), error = %err, "failed to spawn task thread");
      return Err(TickRelayError::TaskCreateFailed);
    }

    let raw = {
      let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
      tasks.push(signal);
      tasks.len()
    };
    debug!(
      task = spec.name(),
      priority = spec.priority().as_u32(),
      core = %spec.core(),
      "spawned task thread; priority and affinity are advisory on the host"
    );
    TaskHandle::from_raw(raw).ok_or(TickRelayError::NullTaskHandle)
  }
}

impl TickHookRegistrar for StdTickPlatform {
  fn register_tick_hook(&self, handler: TickHookHandler, core: CoreId) -> Result<(), TickRelayError> {
    if !self.has_core(core) {
      warn!(%core, cores = self.cores, "tick hook registered for a core that does not exist");
      return Err(TickRelayError::HookRegistrationFailed);
    }
    let mut hooks = self.hooks.lock();
    if hooks.iter().filter(|(bound, _)| *bound == core).count() >= Self::MAX_HOOKS_PER_CORE {
      warn!(%core, "no free tick hook slot");
      return Err(TickRelayError::HookRegistrationFailed);
    }
    hooks.push((core, handler));
    info!(%core, "tick hook registered");
    Ok(())
  }
}
