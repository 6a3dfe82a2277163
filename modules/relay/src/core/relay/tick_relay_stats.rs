//! Snapshot of relay counters.

/// Point-in-time view of what the hook and dispatch loop have done.
///
/// All counters wrap on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickRelayStats {
  ticks_dropped:   u32,
  notifications:   u32,
  yield_requests:  u32,
  dispatches:      u32,
  coalesced_ticks: u32,
}

impl TickRelayStats {
  pub(crate) const fn new(
    ticks_dropped: u32,
    notifications: u32,
    yield_requests: u32,
    dispatches: u32,
    coalesced_ticks: u32,
  ) -> Self {
    Self { ticks_dropped, notifications, yield_requests, dispatches, coalesced_ticks }
  }

  /// Ticks that arrived before the dispatch task existed.
  #[must_use]
  pub const fn ticks_dropped(&self) -> u32 {
    self.ticks_dropped
  }

  /// Notifications sent to the dispatch task.
  #[must_use]
  pub const fn notifications(&self) -> u32 {
    self.notifications
  }

  /// Reschedules requested on interrupt exit.
  #[must_use]
  pub const fn yield_requests(&self) -> u32 {
    self.yield_requests
  }

  /// Calls made into the time-event engine.
  #[must_use]
  pub const fn dispatches(&self) -> u32 {
    self.dispatches
  }

  /// Notifications folded into an earlier pending one.
  #[must_use]
  pub const fn coalesced_ticks(&self) -> u32 {
    self.coalesced_ticks
  }

  /// Every tick the hook saw, delivered or dropped.
  #[must_use]
  pub const fn ticks_observed(&self) -> u32 {
    self.ticks_dropped.wrapping_add(self.notifications)
  }
}
