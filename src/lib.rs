#![deny(missing_docs)]
#![no_std]

//! Facade crate for the tickbridge workspace.
//!
//! Re-exports the tick relay so applications depend on a single crate. Enable the
//! `trace` feature to attribute ticks to the relay in trace records and `iram` to
//! place the tick hook in instruction RAM.

#[cfg(test)]
mod tests;

pub use tickbridge_relay_rs::core::{
  platform::{
    CoreId, PinnedTaskSpec, TaskEntry, TaskHandle, TaskNotifier, TaskPriority, TaskSpawner, TickHookHandler,
    TickHookRegistrar, TickPlatform, TimeEventEngine,
  },
  relay::{
    TickRate, TickRelay, TickRelayConfig, TickRelayError, TickRelayInit, TickRelayPhase, TickRelayStats, TraceSenderId,
  },
  signal::TickSignal,
};
#[cfg(feature = "std")]
pub use tickbridge_relay_rs::std::{StdTickPlatform, StdTickSource};

/// Returns the version of this crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
