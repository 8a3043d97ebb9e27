//! Test utilities for dynlist.
//!
//! # Overview
//!
//! - [`EventRecorder`] - records callback invocations so tests can assert on
//!   the exact sequence of position updates and committed moves
//! - [`offset_ramp`] - generates the cumulative offset samples a pointer would
//!   report while dragging across several neighbors
//! - [`init_test_logging`] - routes `tracing` output through the test harness
//!
//! # Example
//!
//! ```rust
//! use dynlist_test_utils::EventRecorder;
//!
//! let updates = EventRecorder::<(usize, usize)>::new();
//! let callback = updates.pair_callback();
//!
//! callback(0, 1);
//! callback(1, 2);
//!
//! assert_eq!(updates.events(), vec![(0, 1), (1, 2)]);
//! ```

pub mod recorder;
pub mod samples;

pub use recorder::EventRecorder;
pub use samples::offset_ramp;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("dynlist=trace")
        .with_test_writer()
        .try_init();
}
