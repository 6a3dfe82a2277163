//! Process-wide relay record and its initializer.


use portable_atomic::{AtomicU32, AtomicU8, AtomicUsize, Ordering};
use tracing::{debug, error, info};

use super::{
  TickRate, TickRelayConfig, TickRelayCounters, TickRelayError, TickRelayInit, TickRelayPhase, TickRelayStats,
  TraceSenderId,
};
use crate::core::platform::{CoreId, PinnedTaskSpec, TaskHandle, TaskPriority, TickPlatform, TimeEventEngine};

/// Owns everything the tick hook and the dispatch task share.
///
/// Interrupt handlers receive no arguments, so the record is meant to live in a
/// `static` and is handed to the hook and the task as their context pointer:
///
/// ```ignore
/// static RELAY: TickRelay<Esp32Platform, QfTimeEvents> =
///   TickRelay::new(Esp32Platform, QfTimeEvents, TickRelayConfig::new().with_core(CoreId::new(1)));
///
/// fn on_startup() {
///   RELAY.initialize(TickRate::new(0), TaskPriority::new(5));
/// }
/// ```
///
/// Phase, handle, rate and priority are written once by the first initializer
/// and only read afterwards.
pub struct TickRelay<P, E> {
  pub(super) platform: P,
  pub(super) engine:   E,
  config:              TickRelayConfig,
  phase:               AtomicU8,
  task:                AtomicUsize,
  tick_rate:           AtomicU8,
  priority:            AtomicU32,
  pub(super) sender:   Option<TraceSenderId>,
  pub(super) counters: TickRelayCounters,
}

impl<P, E> TickRelay<P, E> {
  /// Creates an uninitialized relay.
  #[must_use]
  pub const fn new(platform: P, engine: E, config: TickRelayConfig) -> Self {
    Self {
      platform,
      engine,
      config,
      phase: AtomicU8::new(TickRelayPhase::Uninitialized.as_u8()),
      task: AtomicUsize::new(0),
      tick_rate: AtomicU8::new(TickRate::DEFAULT.as_u8()),
      priority: AtomicU32::new(0),
      sender: default_trace_sender(),
      counters: TickRelayCounters::new(),
    }
  }

  /// Replaces the trace sender identity. Has no effect without the `trace` feature.
  #[must_use]
  pub const fn with_trace_sender(mut self, sender: TraceSenderId) -> Self {
    if cfg!(feature = "trace") {
      self.sender = Some(sender);
    }
    self
  }

  /// Returns the dispatch task handle once the task exists.
  #[inline(always)]
  #[must_use]
  pub fn task_handle(&self) -> Option<TaskHandle> {
    TaskHandle::from_raw(self.task.load(Ordering::Acquire))
  }

  /// Returns the rate group passed to the engine.
  #[must_use]
  pub fn tick_rate(&self) -> TickRate {
    TickRate::new(self.tick_rate.load(Ordering::Acquire))
  }

  /// Returns the priority the dispatch task was created with.
  #[must_use]
  pub fn priority(&self) -> Option<TaskPriority> {
    self.task_handle().map(|_| TaskPriority::new(self.priority.load(Ordering::Acquire)))
  }

  /// Returns the current lifecycle phase.
  #[must_use]
  pub fn phase(&self) -> TickRelayPhase {
    TickRelayPhase::from_u8(self.phase.load(Ordering::Acquire))
  }

  /// Returns `true` once the task exists and the hook is registered.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.phase() == TickRelayPhase::Running
  }

  /// Returns the task configuration.
  #[must_use]
  pub const fn config(&self) -> &TickRelayConfig {
    &self.config
  }

  /// Returns the core both the task and the hook are bound to.
  #[must_use]
  pub const fn core(&self) -> CoreId {
    self.config.core()
  }

  /// Returns the identity handed to the engine with every tick.
  #[must_use]
  pub const fn trace_sender(&self) -> Option<TraceSenderId> {
    self.sender
  }

  /// Returns the platform collaborators.
  #[must_use]
  pub const fn platform(&self) -> &P {
    &self.platform
  }

  /// Returns the time-event engine.
  #[must_use]
  pub const fn engine(&self) -> &E {
    &self.engine
  }

  /// Returns a snapshot of the hook and dispatch counters.
  #[must_use]
  pub fn stats(&self) -> TickRelayStats {
    self.counters.snapshot()
  }
}

impl<P: TickPlatform, E: TimeEventEngine> TickRelay<P, E> {
  /// Creates the dispatch task and registers the tick hook, once.
  ///
  /// Later calls, whatever their arguments, leave the running relay untouched
  /// and return [`TickRelayInit::AlreadyRunning`].
  ///
  /// # Panics
  ///
  /// Panics when the dispatch task cannot be created or the hook cannot be
  /// registered. A missing tick driver is a startup configuration error.
  pub fn initialize(&'static self, rate: TickRate, priority: TaskPriority) -> TickRelayInit {
    match self.try_initialize(rate, priority) {
      | Ok(init) => init,
      | Err(err) => panic!("tick relay initialization failed: {err}"),
    }
  }

  /// Fallible form of [`Self::initialize`].
  ///
  /// When task creation fails the relay returns to
  /// [`TickRelayPhase::Uninitialized`] and may be initialized again. When hook
  /// registration fails the task already exists, so the relay stays
  /// [`TickRelayPhase::Faulted`] and every later call reports the same error.
  ///
  /// # Errors
  ///
  /// Returns [`TickRelayError`] when the platform cannot create the task or
  /// register the hook.
  pub fn try_initialize(&'static self, rate: TickRate, priority: TaskPriority) -> Result<TickRelayInit, TickRelayError> {
    if let Err(current) = self.phase.compare_exchange(
      TickRelayPhase::Uninitialized.as_u8(),
      TickRelayPhase::Initializing.as_u8(),
      Ordering::AcqRel,
      Ordering::Acquire,
    ) {
      return self.repeat_outcome(TickRelayPhase::from_u8(current), priority);
    }

    self.tick_rate.store(rate.as_u8(), Ordering::Release);
    self.priority.store(priority.as_u32(), Ordering::Release);

    let core = self.core();
    let spec = PinnedTaskSpec::new(self.config.task_name(), self.config.stack_size(), priority, core);
    let handle = match self.platform.create_pinned_task(self.task_entry(), &spec) {
      | Ok(handle) => handle,
      | Err(err) => {
        error!(task = spec.name(), %core, error = %err, "tick relay task creation failed");
        self.phase.store(TickRelayPhase::Uninitialized.as_u8(), Ordering::Release);
        return Err(err);
      },
    };
    // The hook only notifies once it can see the handle.
    self.task.store(handle.as_raw(), Ordering::Release);
    // Only after the task exists: a failed spawn leaves nothing registered.
    if let Some(sender) = self.sender {
      self.engine.register_trace_sender(sender);
    }

    if let Err(err) = self.platform.register_tick_hook(self.hook_handler(), core) {
      error!(%core, error = %err, "tick relay hook registration failed");
      self.phase.store(TickRelayPhase::Faulted.as_u8(), Ordering::Release);
      return Err(err);
    }
    self.phase.store(TickRelayPhase::Running.as_u8(), Ordering::Release);

    info!(
      task = spec.name(),
      %core,
      rate = rate.as_u8(),
      priority = priority.as_u32(),
      stack_size = spec.stack_size(),
      "tick relay started"
    );
    Ok(TickRelayInit::Started(handle))
  }

  fn repeat_outcome(&self, phase: TickRelayPhase, requested: TaskPriority) -> Result<TickRelayInit, TickRelayError> {
    match (phase, self.task_handle()) {
      | (TickRelayPhase::Faulted, _) => Err(TickRelayError::HookRegistrationFailed),
      | (TickRelayPhase::Running, Some(handle)) => {
        debug!(requested_priority = requested.as_u32(), "tick relay already running; initialize ignored");
        Ok(TickRelayInit::AlreadyRunning(handle))
      },
      | _ => {
        debug!("tick relay initialization already in progress");
        Ok(TickRelayInit::InProgress)
      },
    }
  }
}

const fn default_trace_sender() -> Option<TraceSenderId> {
  if cfg!(feature = "trace") { Some(TraceSenderId::TICK_HOOK) } else { None }
}
