//! Testimonial slider state.
//!
//! The carousel owns a ring of `slide_count` positions and a cursor into it.
//! Drawing is delegated to a [`SlideView`] so the transitions can run without
//! a browser.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptyCarousel,
    #[error("slide {index} is out of range for {slide_count} slides")]
    IndexOutOfRange { index: usize, slide_count: usize },
}

/// Everything the inputs (arrow buttons, arrow keys, dots) can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    JumpTo(usize),
}

impl Command {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Command::Previous),
            "ArrowRight" => Some(Command::Next),
            _ => None,
        }
    }
}

/// Rendering surface for the carousel.
pub trait SlideView {
    /// Create one indicator per slide, tagged `0..slide_count` in order.
    fn build_indicators(&mut self, slide_count: usize);
    /// Position every slide relative to `current`.
    fn render(&mut self, current: usize, slide_count: usize);
    /// Clear every indicator, then mark the one tagged `index`.
    fn set_indicator_active(&mut self, index: usize);
}

/// Horizontal offset of `slide` in percent of the viewport width.
pub fn slide_offset(slide: usize, current: usize) -> i64 {
    100 * (slide as i64 - current as i64)
}

/// Reads the slide index stored in an indicator's `data-slide` tag.
pub fn parse_indicator_tag(tag: &str) -> Option<usize> {
    tag.trim().parse().ok()
}

pub struct Carousel<V> {
    slide_count: usize,
    current: usize,
    view: V,
}

impl<V: SlideView> Carousel<V> {
    /// Builds the indicators and shows slide 0.
    pub fn new(slide_count: usize, view: V) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::EmptyCarousel);
        }

        let mut carousel = Self {
            slide_count,
            current: 0,
            view,
        };
        carousel.view.build_indicators(slide_count);
        carousel.show();
        Ok(carousel)
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Applies `command` and returns the new position.
    pub fn dispatch(&mut self, command: Command) -> Result<usize, CarouselError> {
        match command {
            Command::Next => self.advance(),
            Command::Previous => self.retreat(),
            Command::JumpTo(index) => self.jump_to(index)?,
        }
        Ok(self.current)
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slide_count;
        self.show();
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.show();
    }

    /// Out-of-range indices are rejected and leave the view untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        self.current = index;
        self.show();
        Ok(())
    }

    fn show(&mut self) {
        self.view.render(self.current, self.slide_count);
        self.view.set_indicator_active(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct RecordingView {
        offsets: Vec<i64>,
        indicators: Vec<bool>,
        renders: usize,
    }

    impl SlideView for RecordingView {
        fn build_indicators(&mut self, slide_count: usize) {
            self.indicators = vec![false; slide_count];
        }

        fn render(&mut self, current: usize, slide_count: usize) {
            self.offsets = (0..slide_count).map(|i| slide_offset(i, current)).collect();
            self.renders += 1;
        }

        fn set_indicator_active(&mut self, index: usize) {
            for (i, active) in self.indicators.iter_mut().enumerate() {
                *active = i == index;
            }
        }
    }

    fn carousel(slides: usize) -> Carousel<RecordingView> {
        Carousel::new(slides, RecordingView::default()).unwrap()
    }

    fn active_indicators(view: &RecordingView) -> Vec<usize> {
        view.indicators
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn new_shows_first_slide() {
        let c = carousel(4);
        assert_eq!(c.current(), 0);
        assert_eq!(c.slide_count(), 4);
        assert_eq!(c.view().offsets, vec![0, 100, 200, 300]);
        assert_eq!(active_indicators(c.view()), vec![0]);
        assert_eq!(c.view().renders, 1);
    }

    #[test]
    fn new_rejects_empty_carousel() {
        let result = Carousel::new(0, RecordingView::default());
        assert!(matches!(result, Err(CarouselError::EmptyCarousel)));
    }

    #[test]
    fn four_slide_walkthrough() {
        let mut c = carousel(4);
        assert_eq!(c.dispatch(Command::Next), Ok(1));
        for _ in 0..3 {
            c.dispatch(Command::Next).unwrap();
        }
        assert_eq!(c.current(), 0);

        assert_eq!(c.dispatch(Command::Previous), Ok(3));

        assert_eq!(c.dispatch(Command::JumpTo(2)), Ok(2));
        assert_eq!(active_indicators(c.view()), vec![2]);
        assert_eq!(c.view().offsets, vec![-200, -100, 0, 100]);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut c = carousel(4);
        c.advance();
        let renders = c.view().renders;

        let err = c.dispatch(Command::JumpTo(4)).unwrap_err();
        assert_eq!(
            err,
            CarouselError::IndexOutOfRange {
                index: 4,
                slide_count: 4
            }
        );
        assert_eq!(c.current(), 1);
        assert_eq!(c.view().renders, renders);
        assert_eq!(active_indicators(c.view()), vec![1]);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = carousel(1);
        c.advance();
        assert_eq!(c.current(), 0);
        c.retreat();
        assert_eq!(c.current(), 0);
        assert_eq!(c.view().offsets, vec![0]);
    }

    #[test]
    fn arrow_keys_map_to_commands() {
        assert_eq!(Command::from_key("ArrowLeft"), Some(Command::Previous));
        assert_eq!(Command::from_key("ArrowRight"), Some(Command::Next));
        assert_eq!(Command::from_key("ArrowUp"), None);
        assert_eq!(Command::from_key("Escape"), None);
    }

    #[test]
    fn indicator_tags() {
        assert_eq!(parse_indicator_tag("2"), Some(2));
        assert_eq!(parse_indicator_tag(" 0 "), Some(0));
        assert_eq!(parse_indicator_tag("-1"), None);
        assert_eq!(parse_indicator_tag("two"), None);
        assert_eq!(parse_indicator_tag(""), None);
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::Next),
            Just(Command::Previous),
            (0usize..12).prop_map(Command::JumpTo),
        ]
    }

    proptest! {
        #[test]
        fn cursor_stays_in_range(slides in 1usize..8, commands in prop::collection::vec(command(), 0..64)) {
            let mut c = carousel(slides);
            for cmd in commands {
                let _ = c.dispatch(cmd);
                prop_assert!(c.current() < slides);
                prop_assert_eq!(active_indicators(c.view()), vec![c.current()]);
                prop_assert_eq!(c.view().offsets[c.current()], 0);
            }
        }

        #[test]
        fn advance_and_retreat_are_inverse(slides in 1usize..8, start in 0usize..8) {
            let start = start % slides;
            let mut c = carousel(slides);
            c.jump_to(start).unwrap();

            c.advance();
            c.retreat();
            prop_assert_eq!(c.current(), start);

            c.retreat();
            c.advance();
            prop_assert_eq!(c.current(), start);
        }

        #[test]
        fn full_lap_returns_home(slides in 1usize..8, start in 0usize..8) {
            let start = start % slides;
            let mut c = carousel(slides);
            c.jump_to(start).unwrap();
            for _ in 0..slides {
                c.advance();
            }
            prop_assert_eq!(c.current(), start);
        }
    }
}
