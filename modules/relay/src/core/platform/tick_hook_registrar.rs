//! Tick interrupt registration facility.

use super::{CoreId, TickHookHandler};
use crate::core::relay::TickRelayError;

/// Binds callbacks to the hardware tick interrupt of a core.
///
/// Mirrors `esp_register_freertos_tick_hook_for_cpu`.
pub trait TickHookRegistrar: Send + Sync {
  /// Registers `handler` to run on every tick interrupt of `core`.
  ///
  /// # Errors
  ///
  /// Returns [`TickRelayError::HookRegistrationFailed`] when the core has no free
  /// hook slot or does not exist.
  fn register_tick_hook(&self, handler: TickHookHandler, core: CoreId) -> Result<(), TickRelayError>;
}
