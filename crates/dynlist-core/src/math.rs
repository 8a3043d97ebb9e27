//! Math types re-exported from [`glam`].
//!
//! Drag deltas and measured item sizes are exchanged as [`Vec2`]; the reorder
//! engine projects them onto its configured axis.
//!
//! ```
//! use dynlist_core::math::Vec2;
//!
//! let measured = Vec2::new(320.0, 96.0);
//! assert_eq!(measured.y, 96.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
