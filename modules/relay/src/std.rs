mod std_tick_platform;
mod std_tick_source;

pub use std_tick_platform::StdTickPlatform;
pub use std_tick_source::StdTickSource;
