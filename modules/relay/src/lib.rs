#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::cmp_null)]
#![no_std]

//! Interrupt-to-task tick relay.
//!
//! A hardware tick hook runs in interrupt context and does nothing but signal a
//! dedicated dispatch task pinned to the same core. The dispatch task blocks on
//! that single-slot signal and feeds the time-event engine from task context, so
//! engine code never runs while the interrupt is active.
//!
//! The `core` module is `no_std` and talks to the RTOS through the traits in
//! [`crate::core::platform`]. The `std` module provides a thread-backed host platform for
//! simulation and integration tests.

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Runtime-agnostic relay, platform abstractions and signalling primitives.
pub mod core;
/// Thread-backed host platform.
#[cfg(feature = "std")]
pub mod std;
