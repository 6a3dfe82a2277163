//! Deterministic doubles for exercising relays without an RTOS.

mod manual_tick_platform;
mod recording_engine;

pub use manual_tick_platform::ManualTickPlatform;
pub use recording_engine::RecordingEngine;
