//! Single-slot notification usable from interrupt context.

#[cfg(test)]
mod tests;

use core::task::Waker;

use futures::task::AtomicWaker;
use portable_atomic::{AtomicU32, Ordering};

use super::TickSignalFuture;

/// Records pending notifications for one consumer and wakes it.
///
/// Any number of `notify` calls before the consumer runs collapse into a single
/// wake; the consumer learns how many were folded together from [`Self::take`].
pub struct TickSignal {
  pending: AtomicU32,
  waker:   AtomicWaker,
}

impl TickSignal {
  /// Creates a signal with nothing pending.
  #[must_use]
  pub const fn new() -> Self {
    Self { pending: AtomicU32::new(0), waker: AtomicWaker::new() }
  }

  /// Records a notification and wakes the consumer.
  ///
  /// Returns `true` when nothing was pending before, i.e. this call is the one
  /// that made the consumer runnable.
  pub fn notify(&self) -> bool {
    let previous = self.pending.fetch_add(1, Ordering::AcqRel);
    self.waker.wake();
    previous == 0
  }

  /// Consumes all pending notifications and returns how many there were.
  pub fn take(&self) -> u32 {
    self.pending.swap(0, Ordering::AcqRel)
  }

  /// Returns the number of notifications pending right now.
  #[must_use]
  pub fn pending(&self) -> u32 {
    self.pending.load(Ordering::Acquire)
  }

  /// Returns a future that resolves with the consumed count once a notification arrives.
  pub const fn wait(&self) -> TickSignalFuture<'_> {
    TickSignalFuture::new(self)
  }

  pub(crate) fn register_waker(&self, waker: &Waker) {
    self.waker.register(waker);
  }
}

impl Default for TickSignal {
  fn default() -> Self {
    Self::new()
  }
}
