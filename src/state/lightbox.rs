//! Lightbox state machine
//!
//! Closed → Open (static) ↔ Open (slideshow) → Closed.
//!
//! The controller only tracks indices into the working collection; rendering
//! and image loading are driven from the outside after every transition.

use std::time::{Duration, Instant};

/// Interval between automatic slideshow advances
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_millis(2600);

/// Step forward with wraparound. `len` must be non-zero.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Step backward with wraparound. `len` must be non-zero.
pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Handle of the running slideshow timer. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowTimer {
    pub started_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxMode {
    Closed,
    Static,
    Slideshow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowChange {
    Started,
    Stopped,
    /// Nothing to show (empty collection)
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    index: Option<usize>,
    timer: Option<SlideshowTimer>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LightboxMode {
        match (self.index, self.timer) {
            (None, _) => LightboxMode::Closed,
            (Some(_), None) => LightboxMode::Static,
            (Some(_), Some(_)) => LightboxMode::Slideshow,
        }
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Also drives the tick subscription: no handle, no timer
    pub fn is_slideshow(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<SlideshowTimer> {
        self.timer
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    /// Open at `index`. Returns false (and stays as is) when out of range.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            tracing::warn!("Ignoring lightbox open at {} (collection has {})", index, len);
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Close and cancel any slideshow
    pub fn close(&mut self) {
        self.stop_slideshow();
        self.index = None;
    }

    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(len, next_index)
    }

    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.step(len, prev_index)
    }

    fn step(&mut self, len: usize, f: fn(usize, usize) -> usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = f(self.index?, len);
        self.index = Some(index);
        Some(index)
    }

    /// Stop the slideshow if it runs, otherwise start it (opening at 0 if closed)
    pub fn toggle_slideshow(&mut self, len: usize) -> SlideshowChange {
        if self.timer.is_some() {
            self.stop_slideshow();
            return SlideshowChange::Stopped;
        }

        if !self.is_open() && !self.open(0, len) {
            return SlideshowChange::Unavailable;
        }

        self.timer = Some(SlideshowTimer {
            started_at: Instant::now(),
        });
        tracing::debug!("▶️  Slideshow started");
        SlideshowChange::Started
    }

    /// Cancel the timer. A no-op when none is running.
    pub fn stop_slideshow(&mut self) {
        if let Some(timer) = self.timer.take() {
            tracing::debug!("⏹️  Slideshow stopped after {:?}", timer.started_at.elapsed());
        }
    }

    /// Timer tick. Ticks arriving after the slideshow stopped are dropped.
    pub fn tick(&mut self, len: usize) -> Option<usize> {
        if self.timer.is_none() {
            return None;
        }
        self.next(len)
    }

    /// Indices to preload around the current one (previous, next)
    pub fn neighbors(&self, len: usize) -> Option<(usize, usize)> {
        let index = self.index?;
        if len == 0 {
            return None;
        }
        Some((prev_index(index, len), next_index(index, len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_navigate_wrap() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.mode(), LightboxMode::Closed);

        assert!(lightbox.open(1, 3));
        assert_eq!(lightbox.current(), Some(1));
        assert_eq!(lightbox.next(3), Some(2));
        assert_eq!(lightbox.next(3), Some(0));
        assert_eq!(lightbox.prev(3), Some(2));
    }

    #[test]
    fn test_wraparound_edges() {
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(3, 3));
        assert!(!lightbox.open(0, 0));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_navigation_when_closed() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.next(3), None);
        assert_eq!(lightbox.prev(3), None);
        assert_eq!(lightbox.neighbors(3), None);
    }

    #[test]
    fn test_toggle_from_closed_opens_at_zero() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.toggle_slideshow(4), SlideshowChange::Started);
        assert_eq!(lightbox.current(), Some(0));
        assert_eq!(lightbox.mode(), LightboxMode::Slideshow);
    }

    #[test]
    fn test_toggle_twice_leaves_no_timer() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 4);
        assert_eq!(lightbox.toggle_slideshow(4), SlideshowChange::Started);
        assert_eq!(lightbox.toggle_slideshow(4), SlideshowChange::Stopped);
        assert!(lightbox.timer().is_none());
        assert_eq!(lightbox.mode(), LightboxMode::Static);
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn test_toggle_on_empty_collection() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.toggle_slideshow(0), SlideshowChange::Unavailable);
        assert!(!lightbox.is_slideshow());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_cancels_slideshow() {
        let mut lightbox = Lightbox::new();
        lightbox.toggle_slideshow(3);
        lightbox.close();
        assert_eq!(lightbox.mode(), LightboxMode::Closed);
        assert!(lightbox.timer().is_none());

        // Cancelling again is a no-op
        lightbox.stop_slideshow();
        lightbox.close();
        assert_eq!(lightbox.mode(), LightboxMode::Closed);
    }

    #[test]
    fn test_manual_navigation_keeps_timer() {
        let mut lightbox = Lightbox::new();
        lightbox.toggle_slideshow(5);
        let timer = lightbox.timer();

        lightbox.next(5);
        lightbox.prev(5);
        lightbox.prev(5);
        assert_eq!(lightbox.timer(), timer);
        assert_eq!(lightbox.current(), Some(4));
    }

    #[test]
    fn test_tick_advances_only_in_slideshow() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);
        assert_eq!(lightbox.tick(3), None);
        assert_eq!(lightbox.current(), Some(0));

        lightbox.toggle_slideshow(3);
        assert_eq!(lightbox.tick(3), Some(1));
        assert_eq!(lightbox.tick(3), Some(2));
        assert_eq!(lightbox.tick(3), Some(0));
    }

    #[test]
    fn test_neighbors_wrap() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 6);
        assert_eq!(lightbox.neighbors(6), Some((5, 1)));
        lightbox.open(5, 6);
        assert_eq!(lightbox.neighbors(6), Some((4, 0)));
        lightbox.open(0, 1);
        assert_eq!(lightbox.neighbors(1), Some((0, 0)));
    }

    proptest! {
        #[test]
        fn next_and_prev_are_inverse((len, index) in (1usize..500).prop_flat_map(|len| (Just(len), 0..len))) {
            prop_assert_eq!(prev_index(next_index(index, len), len), index);
            prop_assert_eq!(next_index(prev_index(index, len), len), index);
            prop_assert!(next_index(index, len) < len);
            prop_assert!(prev_index(index, len) < len);
        }
    }
}
