//! Engine double that records every tick it receives.

use alloc::vec::Vec;

use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use spin::Mutex;

use crate::core::{
  platform::TimeEventEngine,
  relay::{TickRate, TraceSenderId},
};

/// Records `process_tick` calls and flags any that overlap.
pub struct RecordingEngine {
  calls:    Mutex<Vec<(TickRate, Option<TraceSenderId>)>>,
  senders:  Mutex<Vec<TraceSenderId>>,
  active:   AtomicBool,
  overlaps: AtomicU32,
}

impl RecordingEngine {
  /// Creates an engine with no recorded calls.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      calls:    Mutex::new(Vec::new()),
      senders:  Mutex::new(Vec::new()),
      active:   AtomicBool::new(false),
      overlaps: AtomicU32::new(0),
    }
  }

  /// Returns every recorded call in order.
  #[must_use]
  pub fn calls(&self) -> Vec<(TickRate, Option<TraceSenderId>)> {
    self.calls.lock().clone()
  }

  /// Returns the number of recorded calls.
  #[must_use]
  pub fn call_count(&self) -> usize {
    self.calls.lock().len()
  }

  /// Returns the trace senders registered with this engine.
  #[must_use]
  pub fn registered_senders(&self) -> Vec<TraceSenderId> {
    self.senders.lock().clone()
  }

  /// Returns how many calls started while another was still running.
  #[must_use]
  pub fn overlaps(&self) -> u32 {
    self.overlaps.load(Ordering::Acquire)
  }
}

impl Default for RecordingEngine {
  fn default() -> Self {
    Self::new()
  }
}

impl TimeEventEngine for RecordingEngine {
  fn process_tick(&self, rate: TickRate, sender: Option<TraceSenderId>) {
    if self.active.swap(true, Ordering::AcqRel) {
      self.overlaps.fetch_add(1, Ordering::AcqRel);
    }
    self.calls.lock().push((rate, sender));
    self.active.store(false, Ordering::Release);
  }

  fn register_trace_sender(&self, sender: TraceSenderId) {
    self.senders.lock().push(sender);
  }
}
