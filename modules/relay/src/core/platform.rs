//! Interfaces to the RTOS and interrupt controller.
//!
//! Board support code implements [`TaskSpawner`], [`TaskNotifier`] and
//! [`TickHookRegistrar`]; any type implementing all three is a [`TickPlatform`].

mod core_id;
mod pinned_task_spec;
mod task_entry;
mod task_handle;
mod task_notifier;
mod task_priority;
mod task_spawner;
mod tick_hook_handler;
mod tick_hook_registrar;
mod tick_platform;
mod time_event_engine;

pub use core_id::CoreId;
pub use pinned_task_spec::PinnedTaskSpec;
pub use task_entry::TaskEntry;
pub use task_handle::TaskHandle;
pub use task_notifier::TaskNotifier;
pub use task_priority::TaskPriority;
pub use task_spawner::TaskSpawner;
pub use tick_hook_handler::TickHookHandler;
pub use tick_hook_registrar::TickHookRegistrar;
pub use tick_platform::TickPlatform;
pub use time_event_engine::TimeEventEngine;
