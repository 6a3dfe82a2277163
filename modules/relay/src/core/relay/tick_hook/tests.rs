use alloc::boxed::Box;

use crate::core::{
  platform::{CoreId, TaskPriority},
  relay::{TickRate, TickRelay, TickRelayConfig},
  testing::{ManualTickPlatform, RecordingEngine},
};

type TestRelay = TickRelay<ManualTickPlatform, RecordingEngine>;

fn leak_relay(config: TickRelayConfig) -> &'static TestRelay {
  Box::leak(Box::new(TickRelay::new(ManualTickPlatform::new(), RecordingEngine::new(), config)))
}

#[test]
fn tick_before_initialize_is_dropped() {
  let relay = leak_relay(TickRelayConfig::new());

  relay.on_tick();
  relay.on_tick();

  let stats = relay.stats();
  assert_eq!(stats.ticks_dropped(), 2);
  assert_eq!(stats.notifications(), 0);
  assert!(relay.platform().spawned_tasks().is_empty());
  assert_eq!(relay.platform().pending_notifications(), 0);
  assert!(relay.platform().last_notified().is_none());
}

#[test]
fn tick_notifies_dispatch_task_and_requests_yield() {
  let relay = leak_relay(TickRelayConfig::new());
  let handle = relay.initialize(TickRate::new(0), TaskPriority::new(5)).handle();

  relay.platform().fire_tick(relay.core());

  assert_eq!(relay.platform().last_notified(), handle);
  assert_eq!(relay.platform().pending_notifications(), 1);
  assert_eq!(relay.platform().yield_requests(), 1);
  assert_eq!(relay.stats().notifications(), 1);
  assert_eq!(relay.stats().yield_requests(), 1);
}

#[test]
fn no_yield_without_higher_priority_wake() {
  let relay = leak_relay(TickRelayConfig::new());
  relay.initialize(TickRate::new(0), TaskPriority::new(5));
  relay.platform().set_preempts(false);

  relay.platform().fire_tick(relay.core());

  assert_eq!(relay.platform().pending_notifications(), 1);
  assert_eq!(relay.platform().yield_requests(), 0);
}

#[test]
fn burst_collapses_into_one_pending_wake() {
  let relay = leak_relay(TickRelayConfig::new());
  relay.initialize(TickRate::new(0), TaskPriority::new(5));

  for _ in 0..3 {
    relay.platform().fire_tick(relay.core());
  }

  // Only the first tick found the slot empty and woke the task.
  assert_eq!(relay.platform().yield_requests(), 1);
  assert_eq!(relay.stats().notifications(), 3);
  assert_eq!(relay.stats().ticks_observed(), 3);
}

#[test]
fn ticks_on_other_cores_are_not_observed() {
  let relay = leak_relay(TickRelayConfig::new().with_core(CoreId::new(1)));
  relay.initialize(TickRate::new(0), TaskPriority::new(5));

  relay.platform().fire_tick(CoreId::new(0));

  assert_eq!(relay.platform().pending_notifications(), 0);
  assert_eq!(relay.stats().ticks_observed(), 0);
}

#[test]
fn trampoline_ignores_null_context() {
  unsafe { super::tick_hook_trampoline::<ManualTickPlatform, RecordingEngine>(core::ptr::null_mut()) };
}
