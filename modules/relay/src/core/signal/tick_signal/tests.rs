extern crate std;

use alloc::sync::Arc;
use core::{future::Future, pin::pin, task::Context};
use std::{thread, time::Duration};

use futures::task::noop_waker_ref;

use crate::core::signal::TickSignal;

#[test]
fn first_notify_reports_empty_slot() {
  let signal = TickSignal::new();
  assert!(signal.notify());
  assert!(!signal.notify());
  assert!(!signal.notify());
  assert_eq!(signal.pending(), 3);
}

#[test]
fn take_consumes_every_pending_notification() {
  let signal = TickSignal::new();
  signal.notify();
  signal.notify();
  assert_eq!(signal.take(), 2);
  assert_eq!(signal.take(), 0);
  assert!(signal.notify());
}

#[test]
fn wait_is_pending_until_notified() {
  let signal = TickSignal::new();
  let mut cx = Context::from_waker(noop_waker_ref());
  let mut future = pin!(signal.wait());
  assert!(future.as_mut().poll(&mut cx).is_pending());
  signal.notify();
  signal.notify();
  assert_eq!(future.as_mut().poll(&mut cx), core::task::Poll::Ready(2));
  assert_eq!(signal.pending(), 0);
}

#[cfg(feature = "std")]
#[test]
fn blocked_waiter_is_woken_from_another_thread() {
  let signal = Arc::new(TickSignal::new());
  let producer = {
    let signal = signal.clone();
    thread::spawn(move || {
      thread::sleep(Duration::from_millis(20));
      signal.notify();
    })
  };
  let consumed = futures::executor::block_on(signal.wait());
  producer.join().unwrap();
  assert_eq!(consumed, 1);
}
