/// Platform collaborators: task creation, notifications and tick hook registration.
pub mod platform;
/// Tick relay record, its hook, dispatch loop and initializer.
pub mod relay;
/// Portable single-slot coalescing signal.
pub mod signal;
/// Deterministic platform and engine doubles.
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
