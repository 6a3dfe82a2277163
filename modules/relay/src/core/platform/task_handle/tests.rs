use core::ptr;

use crate::core::platform::TaskHandle;

#[test]
fn zero_and_null_are_not_handles() {
  assert!(TaskHandle::from_raw(0).is_none());
  assert!(TaskHandle::from_ptr(ptr::null_mut()).is_none());
}

#[test]
fn pointer_round_trips_through_handle() {
  let mut task_control_block = 0u32;
  let ptr = (&mut task_control_block as *mut u32).cast::<core::ffi::c_void>();
  let handle = TaskHandle::from_ptr(ptr).unwrap();
  assert_eq!(handle.as_ptr(), ptr);
  assert_eq!(TaskHandle::from_raw(handle.as_raw()), Some(handle));
}
