//! Synthetic drag input.

/// Evenly spaced cumulative offsets from `from` (exclusive) to `to` (inclusive).
///
/// Pointer libraries report the total displacement since drag start on every
/// frame, so each sample is cumulative rather than a per-frame delta.
///
/// ```
/// use dynlist_test_utils::offset_ramp;
///
/// assert_eq!(offset_ramp(0.0, 30.0, 3), vec![10.0, 20.0, 30.0]);
/// ```
pub fn offset_ramp(from: f32, to: f32, steps: usize) -> Vec<f32> {
    if steps == 0 {
        return Vec::new();
    }

    let step = (to - from) / steps as f32;
    (1..=steps)
        .map(|i| if i == steps { to } else { from + step * i as f32 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_steps_is_empty() {
        assert!(offset_ramp(0.0, 100.0, 0).is_empty());
    }

    #[test]
    fn test_negative_ramp_ends_exactly() {
        let samples = offset_ramp(0.0, -90.0, 4);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], -22.5);
        assert_eq!(*samples.last().unwrap(), -90.0);
    }
}
