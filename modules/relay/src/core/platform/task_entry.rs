//! Entry point handed to the RTOS task-creation facility.

use core::ffi::c_void;

/// C-compatible task entry: a function pointer plus its parameter.
///
/// Matches the `TaskFunction_t` / `pvParameters` pair of FreeRTOS.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TaskEntry {
  /// Task body. Never returns for the dispatch task.
  pub func: unsafe extern "C" fn(*mut c_void),
  /// Parameter passed to `func`.
  pub ctx:  *mut c_void,
}

impl TaskEntry {
  /// Runs the entry on the current thread of execution.
  ///
  /// # Safety
  ///
  /// `ctx` must still satisfy whatever contract `func` places on it. Entries built
  /// by the relay point at a `'static` relay record and are always valid.
  pub unsafe fn run(&self) {
    unsafe { (self.func)(self.ctx) }
  }
}

// The relay only builds entries whose context is a `&'static` Sync record.
unsafe impl Send for TaskEntry {}
unsafe impl Sync for TaskEntry {}
