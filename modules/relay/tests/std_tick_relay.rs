#![cfg(feature = "std")]

use std::{
  sync::atomic::{AtomicBool, AtomicU32, Ordering},
  thread,
  time::Duration,
};

use tickbridge_relay_rs::{
  core::{
    platform::{CoreId, TaskPriority, TimeEventEngine},
    relay::{TickRate, TickRelay, TickRelayConfig, TickRelayInit, TraceSenderId},
  },
  std::{StdTickPlatform, StdTickSource},
};
use tokio::{runtime::Handle, time::sleep};

struct SlowEngine {
  calls:     AtomicU32,
  last_rate: AtomicU32,
  busy:      AtomicBool,
  overlaps:  AtomicU32,
  work:      Duration,
}

impl SlowEngine {
  const fn new(work: Duration) -> Self {
    Self {
      calls: AtomicU32::new(0),
      last_rate: AtomicU32::new(u32::MAX),
      busy: AtomicBool::new(false),
      overlaps: AtomicU32::new(0),
      work,
    }
  }
}

impl TimeEventEngine for SlowEngine {
  fn process_tick(&self, rate: TickRate, _sender: Option<TraceSenderId>) {
    if self.busy.swap(true, Ordering::SeqCst) {
      self.overlaps.fetch_add(1, Ordering::SeqCst);
    }
    self.last_rate.store(u32::from(rate.as_u8()), Ordering::SeqCst);
    thread::sleep(self.work);
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.busy.store(false, Ordering::SeqCst);
  }
}

static FAST_RELAY: TickRelay<StdTickPlatform, SlowEngine> = TickRelay::new(
  StdTickPlatform::new(),
  SlowEngine::new(Duration::ZERO),
  TickRelayConfig::new().with_task_name("FastTick").with_core(CoreId::new(1)),
);

static SLOW_RELAY: TickRelay<StdTickPlatform, SlowEngine> = TickRelay::new(
  StdTickPlatform::new(),
  SlowEngine::new(Duration::from_millis(5)),
  TickRelayConfig::new().with_task_name("SlowTick"),
);

static EARLY_RELAY: TickRelay<StdTickPlatform, SlowEngine> =
  TickRelay::new(StdTickPlatform::new(), SlowEngine::new(Duration::ZERO), TickRelayConfig::new());

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn hardware_ticks_reach_engine_from_task_context() {
  let init = FAST_RELAY.initialize(TickRate::new(1), TaskPriority::new(5));
  assert!(init.is_started());

  let source =
    StdTickSource::start(&Handle::current(), FAST_RELAY.platform(), FAST_RELAY.core(), Duration::from_millis(1));
  sleep(Duration::from_millis(100)).await;
  source.stop();
  sleep(Duration::from_millis(20)).await;

  let stats = FAST_RELAY.stats();
  let engine = FAST_RELAY.engine();
  assert!(stats.notifications() > 0);
  assert!(engine.calls.load(Ordering::SeqCst) > 0);
  assert_eq!(engine.last_rate.load(Ordering::SeqCst), 1);
  assert_eq!(engine.overlaps.load(Ordering::SeqCst), 0);
  assert_eq!(stats.ticks_dropped(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn busy_engine_sees_coalesced_ticks() {
  SLOW_RELAY.initialize(TickRate::new(0), TaskPriority::new(5));

  let source =
    StdTickSource::start(&Handle::current(), SLOW_RELAY.platform(), SLOW_RELAY.core(), Duration::from_millis(1));
  sleep(Duration::from_millis(150)).await;
  source.stop();
  sleep(Duration::from_millis(30)).await;

  let stats = SLOW_RELAY.stats();
  assert!(stats.coalesced_ticks() > 0);
  assert!(stats.dispatches() < stats.notifications());
  assert!(stats.dispatches() + stats.coalesced_ticks() <= stats.notifications());
  assert_eq!(SLOW_RELAY.engine().overlaps.load(Ordering::SeqCst), 0);
}

#[test]
fn ticks_before_initialize_are_dropped_then_delivered() {
  EARLY_RELAY.on_tick();
  EARLY_RELAY.platform().fire_tick(EARLY_RELAY.core());
  assert_eq!(EARLY_RELAY.stats().ticks_dropped(), 1);
  assert!(EARLY_RELAY.task_handle().is_none());

  let first = EARLY_RELAY.initialize(TickRate::new(0), TaskPriority::new(3));
  let second = EARLY_RELAY.initialize(TickRate::new(2), TaskPriority::new(8));
  assert_eq!(second, TickRelayInit::AlreadyRunning(first.handle().unwrap()));
  assert_eq!(EARLY_RELAY.priority(), Some(TaskPriority::new(3)));
  assert_eq!(EARLY_RELAY.platform().hook_count(EARLY_RELAY.core()), 1);

  EARLY_RELAY.platform().fire_tick(EARLY_RELAY.core());
  for _ in 0..2000 {
    if EARLY_RELAY.engine().calls.load(Ordering::SeqCst) > 0 {
      break;
    }
    thread::sleep(Duration::from_millis(1));
  }
  assert_eq!(EARLY_RELAY.engine().calls.load(Ordering::SeqCst), 1);
  assert_eq!(EARLY_RELAY.engine().last_rate.load(Ordering::SeqCst), 0);
}
