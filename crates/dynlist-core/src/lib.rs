//! dynlist Core
//!
//! Shared plumbing for the dynlist crates: logging setup, profiling scopes,
//! hash collection aliases and the math types used for drag deltas and sizes.

pub mod alloc;
pub mod logging;
pub mod math;
pub mod profiling;
