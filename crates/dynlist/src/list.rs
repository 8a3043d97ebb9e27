//! Shared reorder engine for one list.
//!
//! A [`DynamicList`] owns the state every item of a list shares: the size table,
//! the swap-distance policy, the drag axis, the anchor recorded at drag start,
//! and the two outgoing callbacks. Each item drives it through its own
//! [`DragSession`](crate::DragSession).

use std::fmt;
use std::rc::Rc;

use dynlist_core::profiling::profile_function;

use crate::config::{Axis, ReorderConfig, SwapDistance};
use crate::error::ReorderResult;
use crate::resolver::resolve_target;
use crate::size_table::SizeTable;

/// Callback receiving a pair of slot indices.
pub type PositionCallback = Rc<dyn Fn(usize, usize)>;

/// An accepted swap: the dragged item moved from `from` to `to`.
///
/// The list owner must apply the same move to its backing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionUpdate {
    pub from: usize,
    pub to: usize,
}

/// Net result of a finished drag, reported once at drag end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionChange {
    pub start: usize,
    pub end: usize,
}

/// Reorder state shared by every item of one list.
///
/// Events are both fired through the registered callbacks and returned to the
/// caller, so an owner can react to them inline.
///
/// # Example
///
/// ```
/// use dynlist::{DynamicList, PositionUpdate};
///
/// let mut list = DynamicList::new(3).with_swap_distance(|s: f32| s / 2.0);
/// for (i, size) in [100.0, 50.0, 80.0].into_iter().enumerate() {
///     list.handle_measure(i, size).unwrap();
/// }
///
/// list.handle_drag_start(0);
/// assert_eq!(list.handle_change(0, 60.0), Some(PositionUpdate { from: 0, to: 1 }));
/// assert_eq!(list.sizes().as_slice(), &[50.0, 100.0, 80.0]);
/// ```
pub struct DynamicList {
    sizes: SizeTable,
    axis: Axis,
    swap_distance: Rc<dyn SwapDistance>,
    /// Slot recorded at drag start; `None` while nothing is dragged.
    anchor: Option<usize>,
    on_position_update: Option<PositionCallback>,
    on_position_change: Option<PositionCallback>,
}

impl DynamicList {
    /// Creates an engine for `item_count` unmeasured items with the default config.
    pub fn new(item_count: usize) -> Self {
        Self::with_config(item_count, ReorderConfig::default())
    }

    pub fn with_config(item_count: usize, config: ReorderConfig) -> Self {
        Self {
            sizes: SizeTable::new(item_count),
            axis: config.axis,
            swap_distance: Rc::new(config.swap_policy),
            anchor: None,
            on_position_update: None,
            on_position_change: None,
        }
    }

    /// Replaces the configured policy with a custom one.
    pub fn with_swap_distance(mut self, policy: impl SwapDistance + 'static) -> Self {
        self.set_swap_distance(policy);
        self
    }

    pub fn set_swap_distance(&mut self, policy: impl SwapDistance + 'static) {
        self.swap_distance = Rc::new(policy);
    }

    /// Registers the callback fired on every accepted swap.
    pub fn on_position_update(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.set_on_position_update(callback);
        self
    }

    pub fn set_on_position_update(&mut self, callback: impl Fn(usize, usize) + 'static) {
        self.on_position_update = Some(Rc::new(callback));
    }

    /// Registers the callback fired once per drag whose final slot differs from its start.
    pub fn on_position_change(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.set_on_position_change(callback);
        self
    }

    pub fn set_on_position_change(&mut self, callback: impl Fn(usize, usize) + 'static) {
        self.on_position_change = Some(Rc::new(callback));
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn sizes(&self) -> &SizeTable {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Slot recorded at the start of the active drag.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Records `index` as the anchor of a new drag.
    pub fn handle_drag_start(&mut self, index: usize) {
        if let Some(previous) = self.anchor {
            tracing::warn!(previous, index, "drag started while another drag is active");
        }
        tracing::debug!(index, "drag start");
        self.anchor = Some(index);
    }

    /// Resolves one offset sample for the item in slot `index`.
    ///
    /// On a swap the size table is updated and `on_position_update` fires.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid slot and a swap is resolved against it.
    pub fn handle_change(&mut self, index: usize, offset: f32) -> Option<PositionUpdate> {
        profile_function!();

        let target = resolve_target(index, offset, self.sizes.as_slice(), &*self.swap_distance);
        if target == index {
            return None;
        }

        self.sizes.swap(index, target);
        tracing::trace!(from = index, to = target, offset, "swap accepted");

        if let Some(callback) = &self.on_position_update {
            callback(index, target);
        }
        Some(PositionUpdate {
            from: index,
            to: target,
        })
    }

    /// Finishes the active drag with the item in slot `end_index`.
    ///
    /// Fires `on_position_change(anchor, end_index)` when the slot changed and
    /// always clears the anchor.
    pub fn handle_drag_end(&mut self, end_index: usize) -> Option<PositionChange> {
        let Some(start) = self.anchor.take() else {
            tracing::debug!(end_index, "drag end without a recorded drag start");
            return None;
        };

        if start == end_index {
            tracing::debug!(index = start, "drag end without a net move");
            return None;
        }

        tracing::debug!(start, end = end_index, "drag committed");
        if let Some(callback) = &self.on_position_change {
            callback(start, end_index);
        }
        Some(PositionChange {
            start,
            end: end_index,
        })
    }

    /// Stores the measured extent of the item in slot `index`.
    pub fn handle_measure(&mut self, index: usize, size: f32) -> ReorderResult<()> {
        if self.sizes.try_measure(index, size)? {
            tracing::trace!(index, size, "item measured");
        }
        Ok(())
    }

    /// Clears the active drag without emitting a committed move.
    pub fn cancel_drag(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            tracing::debug!(anchor, "drag cancelled");
        }
    }

    /// Matches the size table to a new item count. Cancels any active drag.
    pub fn resize(&mut self, len: usize) {
        self.cancel_drag();
        self.sizes.resize(len);
    }

    /// Drops slot `index` from the size table. Cancels any active drag.
    pub fn remove_slot(&mut self, index: usize) -> ReorderResult<f32> {
        self.cancel_drag();
        self.sizes.try_remove(index)
    }
}

impl fmt::Debug for DynamicList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicList")
            .field("sizes", &self.sizes)
            .field("axis", &self.axis)
            .field("anchor", &self.anchor)
            .field("on_position_update", &self.on_position_update.is_some())
            .field("on_position_change", &self.on_position_change.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwapPolicy;
    use dynlist_test_utils::EventRecorder;

    fn measured(sizes: &[f32]) -> DynamicList {
        let mut list = DynamicList::new(sizes.len()).with_swap_distance(|s: f32| s / 2.0);
        for (i, &size) in sizes.iter().enumerate() {
            list.handle_measure(i, size).unwrap();
        }
        list
    }

    #[test]
    fn test_swap_fires_update_once() {
        let updates = EventRecorder::new();
        let mut list = measured(&[100.0, 50.0, 80.0]).on_position_update(updates.pair_callback());

        assert_eq!(list.handle_change(0, 60.0), Some(PositionUpdate { from: 0, to: 1 }));
        assert_eq!(list.sizes().as_slice(), &[50.0, 100.0, 80.0]);
        assert_eq!(updates.events(), vec![(0, 1)]);
    }

    #[test]
    fn test_below_threshold_is_silent() {
        let updates = EventRecorder::new();
        let mut list = measured(&[100.0, 50.0, 80.0]).on_position_update(updates.pair_callback());

        assert_eq!(list.handle_change(0, 20.0), None);
        assert_eq!(list.sizes().as_slice(), &[100.0, 50.0, 80.0]);
        assert!(updates.is_empty());
    }

    #[test]
    fn test_drag_end_reports_net_move() {
        let changes = EventRecorder::new();
        let mut list = measured(&[10.0, 10.0, 10.0]).on_position_change(changes.pair_callback());

        list.handle_drag_start(2);
        assert!(list.is_dragging());
        assert_eq!(list.handle_drag_end(0), Some(PositionChange { start: 2, end: 0 }));
        assert!(!list.is_dragging());
        assert_eq!(changes.events(), vec![(2, 0)]);
    }

    #[test]
    fn test_drag_end_in_place_is_silent() {
        let changes = EventRecorder::new();
        let mut list = measured(&[10.0, 10.0]).on_position_change(changes.pair_callback());

        list.handle_drag_start(1);
        assert_eq!(list.handle_drag_end(1), None);
        assert_eq!(list.anchor(), None);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_drag_end_without_start_is_silent() {
        let changes = EventRecorder::new();
        let mut list = measured(&[10.0, 10.0]).on_position_change(changes.pair_callback());

        assert_eq!(list.handle_drag_end(1), None);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_position_change_callback_is_optional() {
        let mut list = measured(&[10.0, 10.0]);
        list.handle_drag_start(0);
        assert_eq!(list.handle_drag_end(1), Some(PositionChange { start: 0, end: 1 }));
    }

    #[test]
    fn test_measure_out_of_bounds_is_error() {
        let mut list = DynamicList::new(1);
        assert!(list.handle_measure(1, 10.0).is_err());
    }

    #[test]
    fn test_config_policy_applies() {
        let config = ReorderConfig::new().swap_policy(SwapPolicy::Fixed(5.0));
        let mut list = DynamicList::with_config(2, config);
        list.handle_measure(0, 500.0).unwrap();
        list.handle_measure(1, 500.0).unwrap();

        assert_eq!(list.handle_change(0, 6.0), Some(PositionUpdate { from: 0, to: 1 }));
    }

    #[test]
    fn test_resize_cancels_drag() {
        let mut list = measured(&[10.0, 20.0]);
        list.handle_drag_start(0);
        list.resize(3);

        assert!(!list.is_dragging());
        assert_eq!(list.sizes().as_slice(), &[10.0, 20.0, 0.0]);
    }

    #[test]
    fn test_remove_slot() {
        let mut list = measured(&[10.0, 20.0, 30.0]);
        assert_eq!(list.remove_slot(1), Ok(20.0));
        assert_eq!(list.sizes().as_slice(), &[10.0, 30.0]);
        assert!(list.remove_slot(5).is_err());
    }
}
