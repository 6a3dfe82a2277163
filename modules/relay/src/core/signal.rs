//! Coalescing wake signal shared between a tick producer and one consumer.

mod tick_signal;
mod tick_signal_future;

pub use tick_signal::TickSignal;
pub use tick_signal_future::TickSignalFuture;
