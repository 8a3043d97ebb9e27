//! A list owner that keeps items, sizes and sessions in step.
//!
//! [`ReorderList`] plays the part of the external list owner: it stores the
//! backing items under stable [`ItemKey`]s, gives each item a [`DragSession`],
//! and applies every accepted swap to its own sequence. UI layers key their
//! rendering by `ItemKey` and never by slot index.

use dynlist_core::alloc::HashMap;
use dynlist_core::math::Vec2;

use crate::config::{ReorderConfig, SwapDistance};
use crate::error::{ReorderError, ReorderResult};
use crate::list::{DynamicList, PositionChange, PositionUpdate};
use crate::session::{DragSession, DragState};
use crate::size_table::SizeTable;

/// Stable identity of an item in a [`ReorderList`], independent of its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

impl ItemKey {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    key: ItemKey,
    item: T,
    session: DragSession,
}

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// ```
/// use dynlist::move_item;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// move_item(&mut items, 0, 2).unwrap();
/// assert_eq!(items, vec!['b', 'c', 'a', 'd']);
/// ```
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> ReorderResult<()> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ReorderError::IndexOutOfBounds { index, len });
        }
    }

    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

/// Items plus the reorder engine that drives them.
///
/// # Example
///
/// ```
/// use dynlist::{DragState, ReorderList};
///
/// let mut list = ReorderList::new().with_swap_distance(|s: f32| s / 2.0);
/// let a = list.push("a");
/// let b = list.push("b");
/// list.measure_extent(a, 100.0).unwrap();
/// list.measure_extent(b, 50.0).unwrap();
///
/// list.drag_start(a).unwrap();
/// list.drag_to(a, 60.0).unwrap();
/// list.drag_end(a).unwrap();
///
/// assert_eq!(list.items().copied().collect::<Vec<_>>(), vec!["b", "a"]);
/// assert_eq!(list.state(a), Some(DragState::Animating));
/// ```
#[derive(Debug)]
pub struct ReorderList<T> {
    entries: Vec<Entry<T>>,
    slots: HashMap<ItemKey, usize>,
    engine: DynamicList,
    next_key: u64,
}

impl<T> Default for ReorderList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReorderList<T> {
    pub fn new() -> Self {
        Self::with_config(ReorderConfig::default())
    }

    pub fn with_config(config: ReorderConfig) -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            engine: DynamicList::with_config(0, config),
            next_key: 0,
        }
    }

    /// Builds a list from `items` with the default config.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        list.extend(items);
        list
    }

    /// Replaces the configured swap-distance policy.
    pub fn with_swap_distance(mut self, policy: impl SwapDistance + 'static) -> Self {
        self.engine.set_swap_distance(policy);
        self
    }

    /// Observes each accepted swap. The list applies the move itself first.
    pub fn on_position_update(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.engine.set_on_position_update(callback);
        self
    }

    /// Hook for one-shot side effects of a finished drag, e.g. persisting the order.
    pub fn on_position_change(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.engine.set_on_position_change(callback);
        self
    }

    pub fn engine(&self) -> &DynamicList {
        &self.engine
    }

    pub fn sizes(&self) -> &SizeTable {
        self.engine.sizes()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an unmeasured item and returns its key.
    pub fn push(&mut self, item: T) -> ItemKey {
        self.interrupt_drag();

        let key = ItemKey(self.next_key);
        self.next_key += 1;

        let index = self.entries.len();
        self.entries.push(Entry {
            key,
            item,
            session: DragSession::new(index),
        });
        self.slots.insert(key, index);
        self.engine.resize(self.entries.len());
        key
    }

    /// Appends every item, returning their keys in order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> Vec<ItemKey> {
        items.into_iter().map(|item| self.push(item)).collect()
    }

    /// Removes the item with `key`, dropping its measured size.
    pub fn remove(&mut self, key: ItemKey) -> ReorderResult<T> {
        let index = self.slot(key)?;
        self.interrupt_drag();

        self.engine.remove_slot(index)?;
        let entry = self.entries.remove(index);
        self.slots.remove(&key);
        self.reindex(index);
        Ok(entry.item)
    }

    pub fn clear(&mut self) {
        self.interrupt_drag();
        self.entries.clear();
        self.slots.clear();
        self.engine.resize(0);
    }

    /// Starts dragging the item with `key`.
    pub fn drag_start(&mut self, key: ItemKey) -> ReorderResult<()> {
        let index = self.slot(key)?;
        self.entries[index].session.on_drag_start(&mut self.engine);
        Ok(())
    }

    /// Feeds the cumulative drag offset of the item with `key`.
    ///
    /// An accepted swap is applied to the backing items before returning.
    pub fn drag_to(&mut self, key: ItemKey, offset: f32) -> ReorderResult<Option<PositionUpdate>> {
        let index = self.slot(key)?;
        let update = self.entries[index]
            .session
            .on_offset_update(&mut self.engine, offset);

        if let Some(PositionUpdate { from, to }) = update {
            move_item(&mut self.entries, from, to)?;
            self.reindex_range(from.min(to), from.max(to) + 1);
        }
        Ok(update)
    }

    /// Feeds a 2D drag delta, projected onto the configured axis.
    pub fn drag_by_delta(&mut self, key: ItemKey, delta: Vec2) -> ReorderResult<Option<PositionUpdate>> {
        let offset = self.engine.axis().component(delta);
        self.drag_to(key, offset)
    }

    /// Releases the item with `key`.
    pub fn drag_end(&mut self, key: ItemKey) -> ReorderResult<Option<PositionChange>> {
        let index = self.slot(key)?;
        Ok(self.entries[index].session.on_drag_end(&mut self.engine))
    }

    /// Settle animation of the item with `key` finished.
    pub fn animation_complete(&mut self, key: ItemKey) -> ReorderResult<bool> {
        let index = self.slot(key)?;
        Ok(self.entries[index].session.on_animation_complete())
    }

    /// Records the rendered size of the item with `key`.
    pub fn measure(&mut self, key: ItemKey, size: Vec2) -> ReorderResult<()> {
        let index = self.slot(key)?;
        self.entries[index].session.on_measure(&mut self.engine, size)
    }

    /// Records the extent of the item with `key` along the list axis.
    pub fn measure_extent(&mut self, key: ItemKey, extent: f32) -> ReorderResult<()> {
        let index = self.slot(key)?;
        self.engine.handle_measure(index, extent)
    }

    pub fn get(&self, key: ItemKey) -> Option<&T> {
        let index = *self.slots.get(&key)?;
        Some(&self.entries[index].item)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut T> {
        let index = *self.slots.get(&key)?;
        Some(&mut self.entries[index].item)
    }

    /// Current slot of the item with `key`.
    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.slots.get(&key).copied()
    }

    /// Leading edge of the item with `key` along the list axis, from measured extents.
    pub fn offset_of(&self, key: ItemKey) -> Option<f32> {
        let index = *self.slots.get(&key)?;
        Some(self.engine.sizes().offset_of(index))
    }

    /// Combined measured extent of every item.
    pub fn total_extent(&self) -> f32 {
        self.engine.sizes().total_extent()
    }

    pub fn state(&self, key: ItemKey) -> Option<DragState> {
        self.session(key).map(DragSession::state)
    }

    pub fn session(&self, key: ItemKey) -> Option<&DragSession> {
        let index = *self.slots.get(&key)?;
        Some(&self.entries[index].session)
    }

    /// Key of the item currently being dragged.
    pub fn dragging(&self) -> Option<ItemKey> {
        self.entries
            .iter()
            .find(|entry| entry.session.state().is_dragging())
            .map(|entry| entry.key)
    }

    /// Items in slot order with their keys and drag states.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &T, DragState)> {
        self.entries
            .iter()
            .map(|entry| (entry.key, &entry.item, entry.session.state()))
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn keys(&self) -> impl Iterator<Item = ItemKey> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn into_items(self) -> Vec<T> {
        self.entries.into_iter().map(|entry| entry.item).collect()
    }

    fn slot(&self, key: ItemKey) -> ReorderResult<usize> {
        self.slots
            .get(&key)
            .copied()
            .ok_or(ReorderError::UnknownItem(key))
    }

    /// Item count is about to change. An active drag is dropped and every session
    /// goes idle; settling sessions are left alone when nothing is dragged.
    fn interrupt_drag(&mut self) {
        let Some(key) = self.dragging() else {
            return;
        };
        tracing::warn!(?key, "item count changed during a drag, resetting sessions");
        for entry in &mut self.entries {
            entry.session.reset();
        }
        self.engine.cancel_drag();
    }

    /// Resynchronises slot indices for every entry from `start` to the end.
    fn reindex(&mut self, start: usize) {
        self.reindex_range(start, self.entries.len());
    }

    fn reindex_range(&mut self, start: usize, end: usize) {
        for (index, entry) in self.entries[start..end].iter_mut().enumerate() {
            let index = start + index;
            entry.session.set_index(index);
            self.slots.insert(entry.key, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynlist_test_utils::EventRecorder;

    fn half(s: f32) -> f32 {
        s / 2.0
    }

    #[test]
    fn test_move_item_bounds() {
        let mut items = vec![1, 2, 3];
        assert_eq!(
            move_item(&mut items, 0, 3),
            Err(ReorderError::IndexOutOfBounds { index: 3, len: 3 })
        );
        move_item(&mut items, 2, 0).unwrap();
        assert_eq!(items, vec![3, 1, 2]);
        move_item(&mut items, 1, 1).unwrap();
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn test_push_assigns_stable_keys() {
        let mut list = ReorderList::new();
        let a = list.push('a');
        let b = list.push('b');

        assert_ne!(a, b);
        assert_eq!(list.index_of(b), Some(1));
        assert_eq!(list.get(a), Some(&'a'));
        assert_eq!(list.sizes().as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_swap_moves_backing_items() {
        let updates = EventRecorder::new();
        let mut list = ReorderList::new()
            .with_swap_distance(half)
            .on_position_update(updates.pair_callback());
        let keys = list.extend(['a', 'b', 'c']);
        for (key, size) in keys.iter().zip([100.0, 50.0, 80.0]) {
            list.measure_extent(*key, size).unwrap();
        }

        list.drag_start(keys[0]).unwrap();
        assert_eq!(list.drag_to(keys[0], 60.0), Ok(Some(PositionUpdate { from: 0, to: 1 })));

        assert_eq!(list.items().copied().collect::<Vec<_>>(), vec!['b', 'a', 'c']);
        assert_eq!(list.sizes().as_slice(), &[50.0, 100.0, 80.0]);
        assert_eq!(list.index_of(keys[0]), Some(1));
        assert_eq!(list.session(keys[1]).map(DragSession::index), Some(0));
        assert_eq!(updates.events(), vec![(0, 1)]);
    }

    #[test]
    fn test_unknown_key() {
        let mut list = ReorderList::new();
        let a = list.push(1);
        list.remove(a).unwrap();

        assert_eq!(list.drag_start(a), Err(ReorderError::UnknownItem(a)));
        assert_eq!(list.remove(a), Err(ReorderError::UnknownItem(a)));
        assert_eq!(list.state(a), None);
    }

    #[test]
    fn test_remove_keeps_sizes_aligned() {
        let mut list = ReorderList::from_items([10, 20, 30]);
        let keys: Vec<_> = list.keys().collect();
        for (key, size) in keys.iter().zip([1.0, 2.0, 3.0]) {
            list.measure_extent(*key, size).unwrap();
        }

        assert_eq!(list.remove(keys[1]), Ok(20));
        assert_eq!(list.sizes().as_slice(), &[1.0, 3.0]);
        assert_eq!(list.index_of(keys[2]), Some(1));
        assert_eq!(list.session(keys[2]).map(DragSession::index), Some(1));
    }

    #[test]
    fn test_push_during_drag_resets_sessions() {
        let changes = EventRecorder::new();
        let mut list = ReorderList::new().on_position_change(changes.pair_callback());
        let a = list.push("a");
        list.push("b");

        list.drag_start(a).unwrap();
        assert_eq!(list.dragging(), Some(a));

        list.push("c");
        assert_eq!(list.dragging(), None);
        assert_eq!(list.state(a), Some(DragState::Idle));
        assert!(!list.engine().is_dragging());

        // The interrupted session ignores its late release
        assert_eq!(list.drag_end(a), Ok(None));
        assert!(changes.is_empty());
    }

    #[test]
    fn test_push_while_settling_keeps_animation() {
        let mut list = ReorderList::new();
        let a = list.push("a");
        list.push("b");

        list.drag_start(a).unwrap();
        list.drag_end(a).unwrap();
        list.push("c");

        assert_eq!(list.state(a), Some(DragState::Animating));
        assert_eq!(list.animation_complete(a), Ok(true));
        assert_eq!(list.state(a), Some(DragState::Idle));
    }

    #[test]
    fn test_remove_while_settling_keeps_animation() {
        let mut list = ReorderList::from_items(['a', 'b', 'c']);
        let keys: Vec<_> = list.keys().collect();

        list.drag_start(keys[2]).unwrap();
        list.drag_end(keys[2]).unwrap();
        list.remove(keys[0]).unwrap();

        assert_eq!(list.state(keys[2]), Some(DragState::Animating));
        assert_eq!(list.index_of(keys[2]), Some(1));
    }

    #[test]
    fn test_slots_follow_moves_both_ways() {
        let mut list = ReorderList::new().with_swap_distance(half);
        let keys = list.extend(['a', 'b', 'c', 'd']);
        for key in &keys {
            list.measure_extent(*key, 20.0).unwrap();
        }

        list.drag_start(keys[3]).unwrap();
        list.drag_to(keys[3], -15.0).unwrap();
        list.drag_to(keys[3], -15.0).unwrap();
        assert_eq!(list.items().copied().collect::<Vec<_>>(), vec!['a', 'd', 'b', 'c']);

        list.drag_to(keys[3], 15.0).unwrap();
        assert_eq!(list.items().copied().collect::<Vec<_>>(), vec!['a', 'b', 'd', 'c']);

        for (index, (key, _, _)) in list.iter().enumerate() {
            assert_eq!(list.index_of(key), Some(index));
            assert_eq!(list.session(key).map(DragSession::index), Some(index));
        }
    }

    #[test]
    fn test_offsets_track_order() {
        let mut list = ReorderList::new().with_swap_distance(half);
        let keys = list.extend(['a', 'b', 'c']);
        for (key, size) in keys.iter().zip([100.0, 50.0, 80.0]) {
            list.measure_extent(*key, size).unwrap();
        }
        assert_eq!(list.offset_of(keys[2]), Some(150.0));

        list.drag_start(keys[0]).unwrap();
        list.drag_to(keys[0], 60.0).unwrap();

        assert_eq!(list.offset_of(keys[1]), Some(0.0));
        assert_eq!(list.offset_of(keys[0]), Some(50.0));
        assert_eq!(list.total_extent(), 230.0);

        list.remove(keys[1]).unwrap();
        assert_eq!(list.offset_of(keys[1]), None);
        assert_eq!(list.offset_of(keys[2]), Some(100.0));
    }

    #[test]
    fn test_clear() {
        let mut list = ReorderList::from_items(0..4);
        list.clear();
        assert!(list.is_empty());
        assert!(list.sizes().is_empty());
    }
}
