//! Bundle of the platform collaborators a relay needs.

use super::{TaskNotifier, TaskSpawner, TickHookRegistrar};

/// Everything the relay needs from the RTOS.
pub trait TickPlatform: TaskNotifier + TaskSpawner + TickHookRegistrar {}

impl<T> TickPlatform for T where T: TaskNotifier + TaskSpawner + TickHookRegistrar {}
