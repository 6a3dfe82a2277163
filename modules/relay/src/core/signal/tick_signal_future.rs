//! Future returned by [`TickSignal::wait`].

use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::TickSignal;

/// Resolves with the consumed notification count once the signal fires.
#[must_use = "futures do nothing unless polled"]
pub struct TickSignalFuture<'a> {
  signal: &'a TickSignal,
}

impl<'a> TickSignalFuture<'a> {
  pub(crate) const fn new(signal: &'a TickSignal) -> Self {
    Self { signal }
  }
}

impl Future for TickSignalFuture<'_> {
  type Output = u32;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<u32> {
    let consumed = self.signal.take();
    if consumed > 0 {
      return Poll::Ready(consumed);
    }
    self.signal.register_waker(cx.waker());
    match self.signal.take() {
      | 0 => Poll::Pending,
      | consumed => Poll::Ready(consumed),
    }
  }
}
