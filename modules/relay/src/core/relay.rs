//! Tick relay: interrupt hook, dispatch task and one-time initializer.

mod tick_dispatch_loop;
mod tick_hook;
mod tick_rate;
mod tick_relay;
mod tick_relay_config;
mod tick_relay_counters;
mod tick_relay_error;
mod tick_relay_init;
mod tick_relay_phase;
mod tick_relay_stats;
mod trace_sender_id;

pub use tick_rate::TickRate;
pub use tick_relay::TickRelay;
pub use tick_relay_config::TickRelayConfig;
use tick_relay_counters::TickRelayCounters;
pub use tick_relay_error::TickRelayError;
pub use tick_relay_init::TickRelayInit;
pub use tick_relay_phase::TickRelayPhase;
pub use tick_relay_stats::TickRelayStats;
pub use trace_sender_id::TraceSenderId;
