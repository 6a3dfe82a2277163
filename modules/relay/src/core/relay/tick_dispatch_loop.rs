//! Task-context half of the relay.


use core::ffi::c_void;

use tracing::trace;

use super::TickRelay;
use crate::core::platform::{TaskEntry, TickPlatform, TimeEventEngine};

impl<P: TickPlatform, E: TimeEventEngine> TickRelay<P, E> {
  /// Waits for the next notification and feeds the engine once.
  ///
  /// Every notification pending at wake-up is consumed by this one engine call.
  /// Returns the number consumed; zero means the wait ended empty-handed and
  /// the engine was not called.
  ///
  /// Must only run on the dispatch task (or, in tests, on a platform that never
  /// starts it), so engine calls never overlap.
  pub fn dispatch_next(&self) -> u32 {
    let consumed = self.platform.wait_for_notification();
    if consumed == 0 {
      return 0;
    }
    if consumed > 1 {
      trace!(consumed, "coalesced tick notifications");
    }
    self.engine.process_tick(self.tick_rate(), self.sender);
    self.counters.record_dispatch(consumed);
    consumed
  }

  /// Body of the dispatch task.
  pub fn run_dispatch_loop(&self) -> ! {
    loop {
      self.dispatch_next();
    }
  }

  pub(super) fn task_entry(&'static self) -> TaskEntry {
    TaskEntry { func: dispatch_task_trampoline::<P, E>, ctx: self as *const Self as *mut c_void }
  }
}

unsafe extern "C" fn dispatch_task_trampoline<P: TickPlatform, E: TimeEventEngine>(ctx: *mut c_void) {
  if ctx.is_null() {
    return;
  }
  let relay = unsafe { &*(ctx as *const TickRelay<P, E>) };
  relay.run_dispatch_loop()
}
