//! Index and timing arithmetic for the testimonial rotator and gallery marquee.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 2600;
/// Auto-advance never runs faster than this
pub const MIN_AUTO_ADVANCE_MS: u32 = 1200;

pub const DEFAULT_MARQUEE_SPEED: f64 = 40.0;
pub const MIN_MARQUEE_SECONDS: f64 = 8.0;

/// Position within a fixed-length ring of slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn forward(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn back(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jump to `index`; out-of-range requests are ignored
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

/// Milliseconds between automatic advances, or `None` when rotation should
/// not run (reduced motion, or nothing to rotate to).
pub fn auto_advance_period(auto_ms: u32, slide_count: usize, reduced_motion: bool) -> Option<u32> {
    if reduced_motion || slide_count < 2 {
        return None;
    }
    Some(auto_ms.max(MIN_AUTO_ADVANCE_MS))
}

/// Seconds for one full marquee loop at `speed` (higher is faster)
pub fn marquee_duration_secs(speed: f64) -> f64 {
    if !(speed.is_finite() && speed > 0.0) {
        return MIN_MARQUEE_SECONDS;
    }
    (120.0 / speed).max(MIN_MARQUEE_SECONDS)
}

/// The track content for a seamless loop: every item twice, in order.
///
/// Animating the track from 0% to -50% then lands exactly where it started.
pub fn marquee_track<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_both_ways() {
        let r = Rotation::new(3);
        assert_eq!(r.forward().forward().forward().index(), 0);
        assert_eq!(r.back().index(), 2);
        assert_eq!(r.back().back().index(), 1);
    }

    #[test]
    fn test_rotation_select_ignores_out_of_range() {
        let r = Rotation::new(3).select(2);
        assert_eq!(r.index(), 2);
        assert_eq!(r.select(7).index(), 2);
    }

    #[test]
    fn test_empty_rotation_is_inert() {
        let r = Rotation::new(0);
        assert!(r.is_empty());
        assert_eq!(r.forward().index(), 0);
        assert_eq!(r.back().index(), 0);
        assert_eq!(r.select(0).index(), 0);
    }

    #[test]
    fn test_auto_advance_period() {
        assert_eq!(auto_advance_period(DEFAULT_AUTO_ADVANCE_MS, 3, false), Some(2600));
        assert_eq!(auto_advance_period(300, 3, false), Some(MIN_AUTO_ADVANCE_MS));
        assert_eq!(auto_advance_period(2600, 3, true), None);
        assert_eq!(auto_advance_period(2600, 1, false), None);
    }

    #[test]
    fn test_marquee_duration() {
        assert_eq!(marquee_duration_secs(DEFAULT_MARQUEE_SPEED), 8.0);
        assert_eq!(marquee_duration_secs(5.0), 24.0);
        assert_eq!(marquee_duration_secs(0.0), MIN_MARQUEE_SECONDS);
        assert_eq!(marquee_duration_secs(f64::NAN), MIN_MARQUEE_SECONDS);
    }

    #[test]
    fn test_marquee_track_doubles() {
        assert_eq!(marquee_track(&[1, 2, 3]), vec![1, 2, 3, 1, 2, 3]);
        assert!(marquee_track::<u8>(&[]).is_empty());
    }
}
