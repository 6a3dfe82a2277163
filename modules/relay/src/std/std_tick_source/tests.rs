extern crate std;

use alloc::boxed::Box;
use core::time::Duration;

use tokio::{runtime::Handle, time::sleep};

use crate::{
  core::{
    platform::{CoreId, TaskPriority},
    relay::{TickRate, TickRelay, TickRelayConfig},
    testing::RecordingEngine,
  },
  std::{StdTickPlatform, StdTickSource},
};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn source_drives_relay_until_stopped() {
  let relay: &'static TickRelay<StdTickPlatform, RecordingEngine> =
    Box::leak(Box::new(TickRelay::new(StdTickPlatform::new(), RecordingEngine::new(), TickRelayConfig::new())));
  relay.initialize(TickRate::new(0), TaskPriority::new(5));

  let source = StdTickSource::start(&Handle::current(), relay.platform(), CoreId::new(0), Duration::from_millis(1));
  assert_eq!(source.core(), CoreId::new(0));
  assert_eq!(source.resolution(), Duration::from_millis(1));
  sleep(Duration::from_millis(50)).await;
  source.stop();

  sleep(Duration::from_millis(10)).await;
  let observed = relay.stats().ticks_observed();
  assert!(observed > 0);
  assert!(relay.engine().call_count() > 0);

  sleep(Duration::from_millis(20)).await;
  assert_eq!(relay.stats().ticks_observed(), observed);
}
