//! Opaque handle of an RTOS task.

#[cfg(test)]
mod tests;

use core::{ffi::c_void, num::NonZeroUsize};

/// Non-null handle identifying a task created through a [`TaskSpawner`](super::TaskSpawner).
///
/// The value is whatever the platform uses to address the task (a `TaskHandle_t`
/// pointer on FreeRTOS, a slot index on the host platform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(NonZeroUsize);

impl TaskHandle {
  /// Wraps a raw handle value, returning `None` for zero.
  #[inline(always)]
  #[must_use]
  pub const fn from_raw(raw: usize) -> Option<Self> {
    match NonZeroUsize::new(raw) {
      | Some(value) => Some(Self(value)),
      | None => None,
    }
  }

  /// Wraps a raw task pointer, returning `None` for null.
  #[must_use]
  pub fn from_ptr(ptr: *mut c_void) -> Option<Self> {
    Self::from_raw(ptr as usize)
  }

  /// Returns the raw handle value.
  #[inline(always)]
  #[must_use]
  pub const fn as_raw(self) -> usize {
    self.0.get()
  }

  /// Returns the handle as a task pointer.
  #[must_use]
  pub const fn as_ptr(self) -> *mut c_void {
    self.0.get() as *mut c_void
  }
}
