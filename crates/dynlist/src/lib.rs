//! dynlist - drag-to-reorder for lists of variable-size items
//!
//! The crate decides *when* a dragged item should trade places with its
//! neighbor and keeps the measured item sizes aligned with the list order so
//! those decisions stay accurate. Rendering, pointer handling and animation are
//! left to the UI layer, which feeds the engine:
//!
//! - drag start / drag end / animation complete per item
//! - cumulative drag offsets for the dragged item
//! - measured sizes whenever an item renders or changes
//!
//! # Components
//!
//! - [`SizeTable`] - measured extent per slot, swapped alongside the items
//! - [`resolve_target`] - single-step swap decision for one offset sample
//! - [`DragSession`] - per-item `Idle -> Dragging -> Animating -> Idle` machine
//! - [`DynamicList`] - state shared by a list's sessions, fires the callbacks
//! - [`ReorderList`] - ready-made owner that keeps items, sizes and sessions in step
//!
//! # Quick Start
//!
//! ```
//! use dynlist::prelude::*;
//!
//! let mut list = ReorderList::with_config(ReorderConfig::new().axis(Axis::Y))
//!     .on_position_change(|from, to| println!("persist move {from} -> {to}"));
//!
//! let keys = list.extend(["sunset.png", "cat.jpg", "receipt.png"]);
//! for (key, height) in keys.iter().zip([120.0, 64.0, 300.0]) {
//!     list.measure(*key, Vec2::new(200.0, height)).unwrap();
//! }
//!
//! list.drag_start(keys[0]).unwrap();
//! list.drag_to(keys[0], 40.0).unwrap();
//! let committed = list.drag_end(keys[0]).unwrap();
//!
//! assert_eq!(committed, Some(PositionChange { start: 0, end: 1 }));
//! assert_eq!(list.index_of(keys[0]), Some(1));
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod reorder_list;
pub mod resolver;
pub mod session;
pub mod size_table;

pub use config::{Axis, DEFAULT_MIN_SWAP_DISTANCE, ReorderConfig, SwapDistance, SwapPolicy};
pub use error::{ReorderError, ReorderResult};
pub use list::{DynamicList, PositionCallback, PositionChange, PositionUpdate};
pub use reorder_list::{ItemKey, ReorderList, move_item};
pub use resolver::resolve_target;
pub use session::{DragSession, DragState};
pub use size_table::SizeTable;

pub use dynlist_core as core;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        Axis, DragSession, DragState, DynamicList, ItemKey, PositionChange, PositionUpdate,
        ReorderConfig, ReorderError, ReorderList, ReorderResult, SizeTable, SwapDistance,
        SwapPolicy, resolve_target,
    };
    pub use dynlist_core::math::Vec2;
}
