//! Per-item drag lifecycle.
//!
//! ```text
//! Idle --drag start--> Dragging --drag end--> Animating --animation complete--> Idle
//!                        |    ^
//!                        +----+ offset update (may swap)
//! ```

use dynlist_core::math::Vec2;

use crate::error::ReorderResult;
use crate::list::{DynamicList, PositionChange, PositionUpdate};

/// Drag state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Released; settling into its slot.
    Animating,
}

impl DragState {
    pub fn is_idle(self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, DragState::Animating)
    }

    /// Stacking order for this state on top of `base`.
    ///
    /// A dragged item draws above a settling one, which draws above idle items.
    pub fn z_index(self, base: i32) -> i32 {
        match self {
            DragState::Dragging => base + 3,
            DragState::Animating => base + 2,
            DragState::Idle => base + 1,
        }
    }
}

/// Drag session of one list item.
///
/// Tracks the item's current slot and [`DragState`], and forwards lifecycle
/// events to the list's shared [`DynamicList`]. Only one session per list
/// should be dragging at a time.
///
/// # Example
///
/// ```
/// use dynlist::{DragSession, DragState, DynamicList, PositionChange};
///
/// let mut list = DynamicList::new(3).with_swap_distance(|s: f32| s / 2.0);
/// for i in 0..3 {
///     list.handle_measure(i, 40.0).unwrap();
/// }
///
/// let mut session = DragSession::new(0);
/// session.on_drag_start(&mut list);
/// session.on_offset_update(&mut list, 30.0);
/// assert_eq!(session.index(), 1);
///
/// assert_eq!(session.on_drag_end(&mut list), Some(PositionChange { start: 0, end: 1 }));
/// assert_eq!(session.state(), DragState::Animating);
/// assert!(session.on_animation_complete());
/// assert_eq!(session.state(), DragState::Idle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    index: usize,
    state: DragState,
}

impl DragSession {
    /// Creates an idle session for the item in slot `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: DragState::Idle,
        }
    }

    /// Current slot of the item.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Re-synchronises the slot after the owner reordered its items.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Forces the session back to [`DragState::Idle`].
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Begins a drag and anchors it at the current slot.
    ///
    /// Allowed from any state: a new drag may start while the previous release
    /// is still settling.
    pub fn on_drag_start(&mut self, list: &mut DynamicList) {
        self.state = DragState::Dragging;
        list.handle_drag_start(self.index);
    }

    /// Feeds the cumulative drag offset along the list axis.
    ///
    /// Ignored unless dragging. On a swap the session adopts the new slot.
    pub fn on_offset_update(&mut self, list: &mut DynamicList, offset: f32) -> Option<PositionUpdate> {
        if !self.state.is_dragging() {
            return None;
        }

        let update = list.handle_change(self.index, offset)?;
        self.index = update.to;
        Some(update)
    }

    /// Feeds a 2D drag delta, projected onto the list axis.
    pub fn on_drag_delta(&mut self, list: &mut DynamicList, delta: Vec2) -> Option<PositionUpdate> {
        let offset = list.axis().component(delta);
        self.on_offset_update(list, offset)
    }

    /// Releases the drag.
    ///
    /// Returns the committed move when the item ended in a different slot than
    /// it started in. A release while not dragging is ignored.
    pub fn on_drag_end(&mut self, list: &mut DynamicList) -> Option<PositionChange> {
        if !self.state.is_dragging() {
            tracing::debug!(index = self.index, state = ?self.state, "drag end ignored, session not dragging");
            return None;
        }

        self.state = DragState::Animating;
        list.handle_drag_end(self.index)
    }

    /// Settle animation finished. Returns whether the session went idle.
    ///
    /// Completions arriving in any state other than [`DragState::Animating`]
    /// are stale and leave the state untouched.
    pub fn on_animation_complete(&mut self) -> bool {
        if !self.state.is_animating() {
            tracing::warn!(index = self.index, state = ?self.state, "stale animation completion ignored");
            return false;
        }

        self.state = DragState::Idle;
        true
    }

    /// Records the rendered size of this item, using the list axis extent.
    pub fn on_measure(&self, list: &mut DynamicList, size: Vec2) -> ReorderResult<()> {
        list.handle_measure(self.index, list.axis().component(size))
    }
}
