//! Slide carousel state and touch swipe detection.

use std::time::Duration;

pub const TOTAL_SLIDES: usize = 5;

/// How long `next`/`prev` hold the navigation lock.
pub const ANIMATION_LOCK: Duration = Duration::from_millis(100);

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Delay between successive options appearing on mount.
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
    animating: bool,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(TOTAL_SLIDES)
    }
}

impl Carousel {
    /// `total` is clamped to at least one slide.
    pub const fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: if total == 0 { 1 } else { total },
            animating: false,
        }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advance with wrap-around. Returns `true` when the lock was taken and the
    /// host must schedule [`Carousel::release_lock`].
    pub fn next(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.current = (self.current + 1) % self.total;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.current = (self.current + self.total - 1) % self.total;
        true
    }

    /// Jump straight to `index`. Does not take the lock.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.animating || index >= self.total || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn release_lock(&mut self) {
        self.animating = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    end_x: f64,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self {
            start_x: 0.0,
            end_x: 0.0,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
        self.end_x = x;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.end_x = x;
    }

    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let travel = self.start_x - self.end_x;
        if travel > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Next)
        } else if -travel > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }
}

/// Delay before option `index` is revealed.
pub fn entrance_delay(index: usize) -> Duration {
    ENTRANCE_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut carousel = Carousel::default();
        assert!(carousel.go_to(4));

        assert!(carousel.next());
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut carousel = Carousel::default();

        assert!(carousel.prev());
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn second_next_inside_lock_window_is_ignored() {
        let mut carousel = Carousel::default();

        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.current(), 1);
        assert!(carousel.is_animating());

        carousel.release_lock();
        assert!(carousel.next());
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn go_to_respects_lock_and_bounds() {
        let mut carousel = Carousel::default();

        assert!(!carousel.go_to(5));
        assert!(carousel.go_to(3));
        assert!(!carousel.is_animating());

        carousel.next();
        assert!(!carousel.go_to(1));
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn zero_slides_clamps_to_one() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.next());
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn swipe_left_past_threshold_is_next() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(300.0);
        tracker.touch_move(220.0);
        assert_eq!(tracker.touch_end(), Some(SwipeDirection::Next));
    }

    #[test]
    fn swipe_right_past_threshold_is_prev() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(100.0);
        tracker.touch_move(180.0);
        assert_eq!(tracker.touch_end(), Some(SwipeDirection::Prev));
    }

    #[test]
    fn short_or_exact_threshold_travel_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(100.0);
        tracker.touch_move(150.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn tap_after_swipe_does_not_reuse_previous_end() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(300.0);
        tracker.touch_move(100.0);
        assert_eq!(tracker.touch_end(), Some(SwipeDirection::Next));

        tracker.touch_start(400.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn entrance_delay_staggers_by_index() {
        assert_eq!(entrance_delay(0), Duration::ZERO);
        assert_eq!(entrance_delay(3), Duration::from_millis(540));
    }
}
