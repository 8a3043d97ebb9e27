//! Swap decision for a single drag sample.

use dynlist_core::profiling::profile_function;

use crate::config::SwapDistance;

/// Resolves the slot the dragged item should occupy after one offset sample.
///
/// `offset` is the cumulative drag displacement along the list axis, positive
/// toward higher indices. The threshold comes from the *neighbor's* extent, so
/// larger neighbors need proportionally more travel to displace.
///
/// At most one step is taken per call; a drag that passes several neighbors is
/// resolved over successive samples.
///
/// ```
/// use dynlist::resolve_target;
///
/// let sizes = [100.0, 50.0, 80.0];
/// let half = |s: f32| s / 2.0;
///
/// assert_eq!(resolve_target(0, 60.0, &sizes, &half), 1);
/// assert_eq!(resolve_target(0, 20.0, &sizes, &half), 0);
/// assert_eq!(resolve_target(2, 90.0, &sizes, &half), 2);
/// ```
pub fn resolve_target<P>(current: usize, offset: f32, sizes: &[f32], policy: &P) -> usize
where
    P: SwapDistance + ?Sized,
{
    profile_function!();

    let mut target = current;

    if offset > 0.0 {
        let Some(&next) = current.checked_add(1).and_then(|i| sizes.get(i)) else {
            return current;
        };
        if offset > policy.swap_distance(next) {
            target = current + 1;
        }
    } else if offset < 0.0 {
        let Some(&prev) = current.checked_sub(1).and_then(|i| sizes.get(i)) else {
            return current;
        };
        if offset < -policy.swap_distance(prev) {
            target = current - 1;
        }
    }

    // Upper bound is the length, not the last slot. See DESIGN.md.
    target.min(sizes.len())
}
