//! Counters updated by the hook and the dispatch loop.


use portable_atomic::{AtomicU32, Ordering};

use super::TickRelayStats;

/// Relaxed, wrapping event counters.
///
/// The hook-side counters have a single writer, the tick interrupt of the bound
/// core, so they are bumped with a plain load and store rather than a
/// read-modify-write.
pub(crate) struct TickRelayCounters {
  dropped:       AtomicU32,
  notifications: AtomicU32,
  yields:        AtomicU32,
  dispatches:    AtomicU32,
  coalesced:     AtomicU32,
}

impl TickRelayCounters {
  pub(crate) const fn new() -> Self {
    Self {
      dropped:       AtomicU32::new(0),
      notifications: AtomicU32::new(0),
      yields:        AtomicU32::new(0),
      dispatches:    AtomicU32::new(0),
      coalesced:     AtomicU32::new(0),
    }
  }

  #[inline(always)]
  pub(crate) fn record_dropped(&self) {
    bump(&self.dropped);
  }

  #[inline(always)]
  pub(crate) fn record_notification(&self) {
    bump(&self.notifications);
  }

  #[inline(always)]
  pub(crate) fn record_yield(&self) {
    bump(&self.yields);
  }

  pub(crate) fn record_dispatch(&self, consumed: u32) {
    self.dispatches.fetch_add(1, Ordering::Relaxed);
    if consumed > 1 {
      self.coalesced.fetch_add(consumed - 1, Ordering::Relaxed);
    }
  }

  pub(crate) fn snapshot(&self) -> TickRelayStats {
    TickRelayStats::new(
      self.dropped.load(Ordering::Relaxed),
      self.notifications.load(Ordering::Relaxed),
      self.yields.load(Ordering::Relaxed),
      self.dispatches.load(Ordering::Relaxed),
      self.coalesced.load(Ordering::Relaxed),
    )
  }
}

#[inline(always)]
fn bump(counter: &AtomicU32) {
  counter.store(counter.load(Ordering::Relaxed).wrapping_add(1), Ordering::Relaxed);
}
