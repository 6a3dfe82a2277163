//! Interrupt-context half of the relay.
//!
//! Everything reachable from the hook touches only the relay record and one
//! notifier call: no allocation, no locks, no logging. With the `iram` feature the
//! trampoline is placed in `.iram1` so it stays callable while the flash cache is
//! off. Everything it reaches in this crate is `#[inline(always)]`, the atomics
//! it touches are plain loads and stores that inline once optimized (the build
//! script warns about `iram` at `opt-level = 0`), and the platform's
//! `notify_from_isr` and `yield_from_isr` must be placed in `.iram1` likewise.

#[cfg(test)]
mod tests;

use core::ffi::c_void;

use super::TickRelay;
use crate::core::platform::{TickHookHandler, TickPlatform, TimeEventEngine};

impl<P: TickPlatform, E: TimeEventEngine> TickRelay<P, E> {
  /// Handles one hardware tick. Interrupt context only.
  ///
  /// Drops the tick when the dispatch task does not exist yet, otherwise wakes
  /// it and requests a reschedule if the wake preempts the interrupted task.
  #[inline(always)]
  pub fn on_tick(&self) {
    let Some(task) = self.task_handle() else {
      self.counters.record_dropped();
      return;
    };
    self.counters.record_notification();
    if self.platform.notify_from_isr(task) {
      self.counters.record_yield();
      self.platform.yield_from_isr();
    }
  }

  pub(super) fn hook_handler(&'static self) -> TickHookHandler {
    TickHookHandler { func: tick_hook_trampoline::<P, E>, ctx: self as *const Self as *mut c_void }
  }
}

#[cfg_attr(feature = "iram", link_section = ".iram1.tickbridge_tick_hook")]
unsafe extern "C" fn tick_hook_trampoline<P: TickPlatform, E: TimeEventEngine>(ctx: *mut c_void) {
  if ctx as usize == 0 {
    return;
  }
  let relay = unsafe { &*(ctx as *const TickRelay<P, E>) };
  relay.on_tick();
}
