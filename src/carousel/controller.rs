//! The slideshow state owner.

use thiserror::Error;

use crate::carousel::NavIntent;
use crate::carousel::gesture::SwipeTracker;
use crate::carousel::scheduler::AutoplayScheduler;
use crate::content::Slide;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide deck is empty")]
    EmptyDeck,
    #[error("slide index {index} is out of range for a deck of {len}")]
    InvalidIndex { index: usize, len: usize },
}

/// Construction-time tuning for the controller.
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    /// Seconds between automatic advances.
    pub interval_secs: f32,
    /// Minimum horizontal drag, in pixels, that registers as a swipe.
    pub swipe_threshold_px: f32,
    /// Restart the autoplay countdown after every manual navigation. Off by
    /// default: a manual advance just before a scheduled tick is allowed to
    /// produce two advances in quick succession.
    pub reset_on_manual_nav: bool,
    /// Initial reduced-motion preference.
    pub reduced_motion: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_secs: crate::constants::SLIDE_INTERVAL_SECS,
            swipe_threshold_px: crate::constants::SWIPE_THRESHOLD_PX,
            reset_on_manual_nav: false,
            reduced_motion: false,
        }
    }
}

/// Read-only view of the slideshow state for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub paused: bool,
    pub reduced_motion: bool,
}

/// Owns the slide deck and every piece of mutable slideshow state.
///
/// All navigation paths converge here: autoplay ticks, arrow keys, swipe
/// gestures, and indicator clicks. Nothing else touches the current index or
/// the pause flag, so the presentation layer can only observe valid state
/// through [`snapshot`](Self::snapshot).
pub struct CarouselController {
    slides: Vec<Slide>,
    current: usize,
    paused: bool,
    reduced_motion: bool,
    reset_on_manual_nav: bool,
    scheduler: AutoplayScheduler,
    swipe: SwipeTracker,
}

impl CarouselController {
    /// Build a controller over `slides` and start autoplay at slide zero.
    pub fn new(slides: Vec<Slide>, config: CarouselConfig) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        let mut scheduler = AutoplayScheduler::new(config.interval_secs);
        scheduler.start();
        Ok(Self {
            slides,
            current: 0,
            paused: false,
            reduced_motion: config.reduced_motion,
            reset_on_manual_nav: config.reset_on_manual_nav,
            scheduler,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        })
    }

    /// Step to the following slide, wrapping at the end of the deck.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.after_manual_nav();
    }

    /// Step to the preceding slide, wrapping at the start of the deck.
    pub fn prev(&mut self) {
        let n = self.slides.len();
        self.current = (self.current + n - 1) % n;
        self.after_manual_nav();
    }

    /// Jump straight to `index`. Rejected without any state change when the
    /// index falls outside the deck.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::InvalidIndex {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        self.after_manual_nav();
        Ok(())
    }

    pub fn apply(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Next => self.next(),
            NavIntent::Prev => self.prev(),
        }
    }

    /// Freeze autoplay. The current slide stays put.
    pub fn pause(&mut self) {
        self.paused = true;
        self.scheduler.stop();
    }

    /// Resume autoplay with a full fresh interval, regardless of how much of
    /// one had elapsed before the pause.
    pub fn resume(&mut self) {
        self.paused = false;
        self.scheduler.start();
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Update the cosmetic reduced-motion flag. Index, pause state, and
    /// autoplay cadence are never affected.
    pub fn set_reduced_motion(&mut self, flag: bool) {
        self.reduced_motion = flag;
    }

    /// Feed a frame delta to the autoplay countdown, stepping once per full
    /// interval that has elapsed. While paused the scheduler is stopped and
    /// nothing fires.
    pub fn advance(&mut self, dt: f32) {
        for _ in 0..self.scheduler.advance(dt) {
            // Scheduled ticks bypass the manual-navigation hook.
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    /// Begin a drag at `x` window pixels.
    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Feed the drag's latest horizontal sample.
    pub fn touch_move(&mut self, x: f32) {
        self.swipe.update(x);
    }

    /// Resolve the drag; a displacement past the threshold navigates.
    pub fn touch_end(&mut self) {
        if let Some(intent) = self.swipe.finish() {
            self.apply(intent);
        }
    }

    /// Abandon an in-progress drag without navigating.
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current,
            paused: self.paused,
            reduced_motion: self.reduced_motion,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn after_manual_nav(&mut self) {
        if self.reset_on_manual_nav && self.scheduler.is_running() {
            self.scheduler.start();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Slide> {
        vec![
            Slide {
                image: "hero-1.jpg",
                name: "Slide",
                designation: "Test",
                quote: "Quote",
            };
            n
        ]
    }

    fn controller(n: usize) -> CarouselController {
        CarouselController::new(deck(n), CarouselConfig::default()).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = CarouselController::new(vec![], CarouselConfig::default());
        assert!(matches!(result, Err(CarouselError::EmptyDeck)));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = controller(6);
        c.prev();
        assert_eq!(c.snapshot().current_index, 5);
        c.next();
        assert_eq!(c.snapshot().current_index, 0);
    }

    #[test]
    fn n_steps_return_to_start() {
        for n in [1, 2, 6] {
            let mut c = controller(n);
            for start in 0..n {
                c.go_to(start).unwrap();
                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.snapshot().current_index, start);
                for _ in 0..n {
                    c.prev();
                }
                assert_eq!(c.snapshot().current_index, start);
            }
        }
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_input() {
        let mut c = controller(3);
        let ops: [&dyn Fn(&mut CarouselController); 5] = [
            &|c| c.next(),
            &|c| c.prev(),
            &|c| c.go_to(2).unwrap(),
            &|c| c.apply(NavIntent::Next),
            &|c| c.advance(11.0),
        ];
        for i in 0..100 {
            ops[i % ops.len()](&mut c);
            assert!(c.snapshot().current_index < 3);
        }
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut c = controller(6);
        c.go_to(4).unwrap();

        assert_eq!(
            c.go_to(6),
            Err(CarouselError::InvalidIndex { index: 6, len: 6 })
        );
        assert_eq!(
            c.go_to(usize::MAX),
            Err(CarouselError::InvalidIndex { index: usize::MAX, len: 6 })
        );
        // Rejected calls leave the whole snapshot untouched.
        assert_eq!(
            c.snapshot(),
            CarouselSnapshot { current_index: 4, paused: false, reduced_motion: false }
        );
    }

    #[test]
    fn pause_freezes_autoplay() {
        let mut c = controller(6);
        c.advance(5.0);
        assert_eq!(c.snapshot().current_index, 1);

        c.pause();
        c.advance(25.0);
        assert_eq!(c.snapshot().current_index, 1);
        assert!(c.snapshot().paused);

        c.resume();
        c.advance(5.0);
        assert_eq!(c.snapshot().current_index, 2);
    }

    #[test]
    fn resume_grants_a_full_interval() {
        let mut c = controller(6);
        c.advance(4.0);
        c.pause();
        c.resume();
        // The four pre-pause seconds must not count toward this interval.
        c.advance(4.5);
        assert_eq!(c.snapshot().current_index, 0);
        c.advance(1.0);
        assert_eq!(c.snapshot().current_index, 1);
    }

    #[test]
    fn end_to_end_scenario() {
        // Deck of six, default five second interval.
        let mut c = controller(6);

        c.advance(15.0); // three intervals
        assert_eq!(c.snapshot().current_index, 3);

        c.pause();
        c.advance(10.0); // two intervals while paused
        assert_eq!(c.snapshot().current_index, 3);

        c.resume();
        c.advance(5.0);
        assert_eq!(c.snapshot().current_index, 4);
    }

    #[test]
    fn reduced_motion_is_cosmetic_only() {
        let mut c = controller(6);
        c.advance(4.0);
        c.set_reduced_motion(true);
        assert_eq!(c.snapshot().current_index, 0);
        // The in-flight countdown keeps its elapsed time.
        c.advance(1.0);
        assert_eq!(c.snapshot().current_index, 1);
        assert!(c.snapshot().reduced_motion);

        c.set_reduced_motion(false);
        assert_eq!(c.snapshot().current_index, 1);
        assert!(!c.snapshot().paused);
    }

    #[test]
    fn manual_nav_keeps_the_countdown_by_default() {
        let mut c = controller(6);
        c.advance(4.0);
        c.next();
        // One second later the scheduled tick still lands: two advances in
        // quick succession.
        c.advance(1.0);
        assert_eq!(c.snapshot().current_index, 2);
    }

    #[test]
    fn reset_on_manual_nav_variant_restarts_the_countdown() {
        let config = CarouselConfig {
            reset_on_manual_nav: true,
            ..CarouselConfig::default()
        };
        let mut c = CarouselController::new(deck(6), config).unwrap();
        c.advance(4.0);
        c.next();
        c.advance(1.0);
        assert_eq!(c.snapshot().current_index, 1);
        c.advance(4.0); // completes the restarted interval
        assert_eq!(c.snapshot().current_index, 2);
    }

    #[test]
    fn swipes_route_through_the_controller() {
        let mut c = controller(6);

        c.touch_start(200.0);
        c.touch_move(124.0);
        c.touch_end();
        assert_eq!(c.snapshot().current_index, 1);

        c.touch_start(200.0);
        c.touch_move(126.0);
        c.touch_end();
        assert_eq!(c.snapshot().current_index, 1);

        c.touch_start(200.0);
        c.touch_move(276.0);
        c.touch_end();
        assert_eq!(c.snapshot().current_index, 0);

        c.touch_start(200.0);
        c.touch_move(0.0);
        c.touch_cancel();
        c.touch_end();
        assert_eq!(c.snapshot().current_index, 0);
    }

    #[test]
    fn single_slide_deck_wraps_onto_itself() {
        let mut c = controller(1);
        c.next();
        c.prev();
        c.advance(50.0);
        assert_eq!(c.snapshot().current_index, 0);
    }

    #[test]
    fn manual_nav_while_paused_stays_paused() {
        let mut c = controller(6);
        c.pause();
        c.next();
        c.prev();
        c.go_to(3).unwrap();
        let snapshot = c.snapshot();
        assert_eq!(snapshot.current_index, 3);
        assert!(snapshot.paused);
        c.advance(50.0);
        assert_eq!(c.snapshot().current_index, 3);
    }
}
