//! Time-event engine entry point.

use crate::core::relay::{TickRate, TraceSenderId};

/// The framework component that advances and fires time events.
///
/// Only ever called from the dispatch task, never concurrently with itself.
pub trait TimeEventEngine: Send + Sync {
  /// Processes one tick (or one coalesced burst of ticks) for `rate`.
  ///
  /// `sender` identifies the relay in trace records when tracing is compiled in.
  fn process_tick(&self, rate: TickRate, sender: Option<TraceSenderId>);

  /// Registers `sender` in the trace dictionaries.
  fn register_trace_sender(&self, _sender: TraceSenderId) {}
}
