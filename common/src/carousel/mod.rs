//! Pagination and transition state of the supplier carousel.
//!
//! The carousel shows `items_per_page` suppliers starting at `current_index`.
//! Page size depends on the viewport width, which is passed in rather than
//! read from the window so the math runs without a display surface.
//!
//! Navigation happens in two phases: `begin` starts the leaving animation
//! and hands out a transition token, and `complete` (called with that token
//! after `TRANSITION_DELAY_MS`) moves the index and brings the new page in.
//! `reset` invalidates every token handed out before it.

use std::ops::Range;

pub mod logo_cache;

/// Viewport width, in CSS pixels, from which two items fit on a page.
pub const LARGE_SCREEN_BREAKPOINT: f64 = 960.0;

/// Delay between the leaving animation and the page swap.
pub const TRANSITION_DELAY_MS: u32 = 300;

/// Items per page for a given viewport width.
pub fn items_per_page_for_width(width: f64) -> usize {
    if width < LARGE_SCREEN_BREAKPOINT {
        1
    } else {
        2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Inline animation state of the sliding track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub opacity: f64,
    /// Horizontal translation, in percent of the track width.
    pub translate_percent: i32,
}

impl Animation {
    pub const VISIBLE: Animation = Animation {
        opacity: 1.0,
        translate_percent: 0,
    };

    /// Fade out while sliding away: right when going back, left when going forward.
    pub fn leaving(direction: Direction) -> Animation {
        let translate_percent = match direction {
            Direction::Previous => 100,
            Direction::Next => -100,
        };
        Animation {
            opacity: 0.0,
            translate_percent,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "display:flex;width:100%;opacity:{};transform:translateX({}%);transition:opacity {ms}ms ease, transform {ms}ms ease;",
            self.opacity,
            self.translate_percent,
            ms = TRANSITION_DELAY_MS
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    items_per_page: usize,
    animation: Animation,
    transitioning: bool,
    /// Token of the latest transition; bumped by `begin` and `reset`.
    transition: u64,
}

impl CarouselState {
    pub fn new(len: usize, viewport_width: f64) -> Self {
        Self {
            len,
            current_index: 0,
            items_per_page: items_per_page_for_width(viewport_width),
            animation: Animation::VISIBLE,
            transitioning: false,
            transition: 0,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[cfg(test)]
    fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.items_per_page)
    }

    /// 1-based page of `current_index`.
    pub fn current_page(&self) -> usize {
        self.current_index / self.items_per_page + 1
    }

    /// Indices of the suppliers on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_index.min(self.len);
        let end = (self.current_index + self.items_per_page).min(self.len);
        start..end
    }

    /// Navigation buttons are rendered only when there is more than one page.
    pub fn show_controls(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current_index + self.items_per_page >= self.len
    }

    /// The page indicator is only shown on wide viewports.
    pub fn is_large_screen(&self) -> bool {
        self.items_per_page > 1
    }

    /// Starts a transition and returns the token `complete` expects.
    ///
    /// Returns `None` if one is already running, in which case the click is
    /// dropped and no swap must be scheduled.
    pub fn begin(&mut self, direction: Direction) -> Option<u64> {
        if self.transitioning {
            return None;
        }
        self.transitioning = true;
        self.transition += 1;
        self.animation = Animation::leaving(direction);
        Some(self.transition)
    }

    /// Swaps to the neighbouring page, wrapping around at both ends.
    ///
    /// A token other than the one of the running transition (a swap
    /// scheduled before a `reset`) is ignored and `false` is returned.
    pub fn complete(&mut self, direction: Direction, token: u64) -> bool {
        if !self.transitioning || token != self.transition {
            return false;
        }
        let per_page = self.items_per_page;
        self.current_index = match direction {
            Direction::Previous if self.current_index == 0 => self.len.saturating_sub(per_page),
            Direction::Previous => self.current_index.saturating_sub(per_page),
            Direction::Next if self.current_index + per_page >= self.len => 0,
            Direction::Next => self.current_index + per_page,
        };
        self.animation = Animation::VISIBLE;
        self.transitioning = false;
        true
    }

    /// Recomputes the page size for a new viewport width.
    ///
    /// The index is realigned down to a multiple of the new page size so the
    /// visible slice always starts inside the list.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let per_page = items_per_page_for_width(viewport_width);
        if per_page == self.items_per_page {
            return false;
        }
        self.items_per_page = per_page;
        self.current_index = (self.current_index / per_page) * per_page;
        true
    }

    /// Starts over on a new list.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current_index = 0;
        self.animation = Animation::VISIBLE;
        self.transitioning = false;
        self.transition += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: f64 = 480.0;
    const WIDE: f64 = 1280.0;

    fn step(state: &mut CarouselState, direction: Direction) {
        let token = state.begin(direction).expect("no transition running");
        assert!(state.complete(direction, token));
    }

    #[test]
    fn page_size_follows_breakpoint() {
        assert_eq!(items_per_page_for_width(959.9), 1);
        assert_eq!(items_per_page_for_width(LARGE_SCREEN_BREAKPOINT), 2);
        assert_eq!(items_per_page_for_width(WIDE), 2);
    }

    #[test]
    fn total_pages_is_ceiling() {
        for (len, width, pages) in [(0, WIDE, 0), (1, WIDE, 1), (3, WIDE, 2), (4, WIDE, 2), (3, NARROW, 3)] {
            assert_eq!(CarouselState::new(len, width).total_pages(), pages);
        }
    }

    #[test]
    fn next_cycles_back_to_start() {
        for (len, width) in [(4, WIDE), (6, WIDE), (5, NARROW), (1, NARROW)] {
            let mut state = CarouselState::new(len, width);
            let clicks = len / state.items_per_page();
            for _ in 0..clicks {
                step(&mut state, Direction::Next);
            }
            assert_eq!(state.current_index(), 0, "len {len}");
        }
    }

    #[test]
    fn previous_from_start_wraps_to_last_slice() {
        let mut state = CarouselState::new(5, WIDE);
        step(&mut state, Direction::Previous);
        assert_eq!(state.current_index(), 3);

        let mut single = CarouselState::new(1, WIDE);
        step(&mut single, Direction::Previous);
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn three_suppliers_two_per_page() {
        let mut state = CarouselState::new(3, WIDE);
        assert_eq!(state.visible_range(), 0..2);
        assert_eq!(state.current_page(), 1);
        assert!(state.show_controls());
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());

        step(&mut state, Direction::Next);
        assert_eq!(state.visible_range(), 2..3);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.total_pages(), 2);
        assert!(state.next_disabled());
        assert!(!state.prev_disabled());
    }

    #[test]
    fn single_page_hides_controls() {
        let state = CarouselState::new(2, WIDE);
        assert!(!state.show_controls());
        assert!(CarouselState::new(2, NARROW).show_controls());
    }

    #[test]
    fn transition_animates_out_then_in() {
        let mut state = CarouselState::new(4, WIDE);
        let token = state.begin(Direction::Next).unwrap();
        assert_eq!(state.animation().opacity, 0.0);
        assert_eq!(state.animation().translate_percent, -100);
        assert_eq!(state.current_index(), 0);
        state.complete(Direction::Next, token);
        assert_eq!(state.animation(), Animation::VISIBLE);

        assert!(state.begin(Direction::Previous).is_some());
        assert_eq!(state.animation().translate_percent, 100);
    }

    #[test]
    fn overlapping_clicks_are_dropped() {
        let mut state = CarouselState::new(6, WIDE);
        let token = state.begin(Direction::Next).unwrap();
        assert_eq!(state.begin(Direction::Next), None);
        assert!(state.complete(Direction::Next, token));
        assert_eq!(state.current_index(), 2);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn swap_scheduled_before_reset_is_ignored() {
        let mut state = CarouselState::new(6, WIDE);
        let stale = state.begin(Direction::Next).unwrap();
        state.reset(6);
        assert!(!state.complete(Direction::Next, stale));
        assert_eq!(state.current_index(), 0);

        let token = state.begin(Direction::Next).unwrap();
        assert!(!state.complete(Direction::Next, stale));
        assert!(state.complete(Direction::Next, token));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn resize_realigns_index() {
        let mut state = CarouselState::new(4, NARROW);
        for _ in 0..3 {
            step(&mut state, Direction::Next);
        }
        assert_eq!(state.current_index(), 3);

        assert!(state.resize(WIDE));
        assert_eq!(state.items_per_page(), 2);
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.visible_range(), 2..4);
        assert_eq!(state.current_page(), 2);

        assert!(state.resize(NARROW));
        assert_eq!(state.current_index(), 2);
        assert!(!state.resize(NARROW - 1.0));
    }

    #[test]
    fn reset_starts_from_first_page() {
        let mut state = CarouselState::new(4, WIDE);
        step(&mut state, Direction::Next);
        let _ = state.begin(Direction::Next);
        state.reset(7);
        assert_eq!(state.len(), 7);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_transitioning());
        assert_eq!(state.animation(), Animation::VISIBLE);
    }

    #[test]
    fn style_carries_animation() {
        let style = Animation::leaving(Direction::Next).style();
        assert!(style.contains("opacity:0;"));
        assert!(style.contains("translateX(-100%)"));
        assert!(style.contains("300ms"));
    }
}
