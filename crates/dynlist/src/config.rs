//! Configuration for reorder behavior.

use dynlist_core::math::Vec2;

/// Smallest threshold the default policy will produce, in pixels.
///
/// Keeps unmeasured (zero-size) neighbors from swapping on the first pixel of motion.
pub const DEFAULT_MIN_SWAP_DISTANCE: f32 = 4.0;

/// Axis along which items are stacked and dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Items laid out left to right; widths are measured.
    X,
    /// Items laid out top to bottom; heights are measured.
    #[default]
    Y,
}

impl Axis {
    /// The component of `v` along this axis.
    ///
    /// Used both for measured sizes (extent) and drag deltas (offset).
    #[inline]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Maps a neighbor's measured extent to the drag distance needed to swap past it.
///
/// Implementations must be pure. Any `Fn(f32) -> f32` is a policy:
///
/// ```
/// use dynlist::config::SwapDistance;
///
/// let third = |neighbor: f32| neighbor / 3.0;
/// assert_eq!(third.swap_distance(90.0), 30.0);
/// ```
pub trait SwapDistance {
    fn swap_distance(&self, neighbor: f32) -> f32;
}

impl<F> SwapDistance for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn swap_distance(&self, neighbor: f32) -> f32 {
        self(neighbor)
    }
}

/// Built-in swap-distance policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwapPolicy {
    /// Half the neighbor's extent, never below `min`.
    HalfExtent { min: f32 },
    /// `ratio` of the neighbor's extent, never below `min`.
    Fraction { ratio: f32, min: f32 },
    /// A constant distance regardless of neighbor size.
    Fixed(f32),
}

impl Default for SwapPolicy {
    fn default() -> Self {
        SwapPolicy::HalfExtent {
            min: DEFAULT_MIN_SWAP_DISTANCE,
        }
    }
}

impl SwapDistance for SwapPolicy {
    fn swap_distance(&self, neighbor: f32) -> f32 {
        match *self {
            SwapPolicy::HalfExtent { min } => (neighbor * 0.5).max(min),
            SwapPolicy::Fraction { ratio, min } => (neighbor * ratio).max(min),
            SwapPolicy::Fixed(distance) => distance,
        }
    }
}

/// Configuration for a [`DynamicList`](crate::DynamicList).
#[derive(Debug, Clone, Default)]
pub struct ReorderConfig {
    /// Drag and measurement axis.
    pub axis: Axis,
    /// Threshold policy used unless a custom one is installed.
    pub swap_policy: SwapPolicy,
}

impl ReorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the drag axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the swap-distance policy.
    pub fn swap_policy(mut self, policy: SwapPolicy) -> Self {
        self.swap_policy = policy;
        self
    }
}
