//! Tokio interval standing in for the hardware tick timer.

extern crate std;

#[cfg(test)]
mod tests;

use core::time::Duration;

use tokio::{
  runtime::Handle,
  task::JoinHandle,
  time::{MissedTickBehavior, interval},
};
use tracing::debug;

use super::StdTickPlatform;
use crate::core::platform::CoreId;

/// Fires [`StdTickPlatform::fire_tick`] for one core at a fixed resolution.
///
/// The timer stops when [`Self::stop`] is called or the source is dropped.
#[must_use = "dropping the source stops the ticks"]
pub struct StdTickSource {
  core:       CoreId,
  resolution: Duration,
  join:       JoinHandle<()>,
}

impl StdTickSource {
  /// Starts ticking `core` of `platform` every `resolution` on the given runtime.
  pub fn start(handle: &Handle, platform: &'static StdTickPlatform, core: CoreId, resolution: Duration) -> Self {
    let join = handle.spawn(async move {
      let mut ticker = interval(resolution);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
      // The first tick of a Tokio interval completes immediately.
      ticker.tick().await;
      loop {
        ticker.tick().await;
        platform.fire_tick(core);
      }
    });
    debug!(%core, resolution_us = duration_to_micros(resolution), "host tick source started");
    Self { core, resolution, join }
  }

  /// Returns the core being ticked.
  #[must_use]
  pub const fn core(&self) -> CoreId {
    self.core
  }

  /// Returns the tick period.
  #[must_use]
  pub const fn resolution(&self) -> Duration {
    self.resolution
  }

  /// Stops the timer.
  pub fn stop(self) {
    drop(self);
  }
}

impl Drop for StdTickSource {
  fn drop(&mut self) {
    self.join.abort();
  }
}

fn duration_to_micros(duration: Duration) -> u64 {
  let micros = duration.as_micros();
  if micros > u64::MAX as u128 { u64::MAX } else { micros as u64 }
}
