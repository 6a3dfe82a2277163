//! Callback registered with the hardware tick source.

use core::ffi::c_void;

/// Callback handler invoked from the tick interrupt.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TickHookHandler {
  /// Function pointer for the callback.
  pub func: unsafe extern "C" fn(*mut c_void),
  /// Context pointer passed to the callback.
  pub ctx:  *mut c_void,
}

impl TickHookHandler {
  /// Invokes the callback.
  ///
  /// # Safety
  ///
  /// Must be called from the interrupt (or simulated interrupt) context of the core
  /// the handler was registered for, with `ctx` still valid for `func`.
  #[inline(always)]
  pub unsafe fn invoke(&self) {
    unsafe { (self.func)(self.ctx) }
  }
}

// Handlers built by the relay carry a pointer to a `'static` Sync record.
unsafe impl Send for TickHookHandler {}
unsafe impl Sync for TickHookHandler {}
