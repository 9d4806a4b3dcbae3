//! Slide animation bound to the navigation engine.

use crate::navigation::{Direction, Presenter, SectionIndex};
use std::time::{Duration, Instant};

/// Share of the slide during which text is dimmed.
///
const DIM_SHARE: f64 = 0.5;

/// Visible section plus the slide that brought it in.
///
/// `render` carries no clock, so the slide starts on the first frame drawn
/// after it.
///
#[derive(Debug, Clone)]
pub struct Stage {
    section: SectionIndex,
    direction: Direction,
    slide_duration: Duration,
    started_at: Option<Instant>,
    animating: bool,
    renders: usize,
}

impl Stage {
    pub fn new(slide_duration: Duration) -> Self {
        Stage {
            section: 0,
            direction: Direction::Still,
            slide_duration,
            started_at: None,
            animating: false,
            renders: 0,
        }
    }

    /// Number of renders that changed what is shown.
    ///
    #[cfg(test)]
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Slide progress in `[0, 1]`, eased out.
    ///
    pub fn progress(&mut self, now: Instant) -> f64 {
        if !self.animating || self.slide_duration.is_zero() {
            return 1.0;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let linear = now.saturating_duration_since(started_at).as_secs_f64()
            / self.slide_duration.as_secs_f64();
        if linear >= 1.0 {
            self.animating = false;
            return 1.0;
        }
        1.0 - (1.0 - linear).powi(3)
    }

    /// Signed column offset for an area `width` columns wide. Positive while
    /// entering from the right.
    ///
    pub fn offset(&mut self, now: Instant, width: u16) -> i32 {
        let remaining = 1.0 - self.progress(now);
        let travel = f64::from(width) * remaining;
        i32::from(self.direction.signum()) * travel.round() as i32
    }

    /// Dimming in `[0, 1]`, fading out over the first half of the slide.
    ///
    pub fn dim(&mut self, now: Instant) -> f64 {
        let progress = self.progress(now);
        (1.0 - progress / DIM_SHARE).clamp(0.0, 1.0)
    }
}

impl Presenter for Stage {
    fn render(&mut self, index: SectionIndex, direction: Direction) {
        if self.renders > 0 && index == self.section && direction == self.direction {
            return;
        }
        log::debug!("Presenting section {} ({:?})", index, direction);
        self.renders += 1;
        self.section = index;
        self.direction = direction;
        self.animating = direction != Direction::Still;
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn mount_render_is_static() {
        let mut stage = Stage::new(ms(350));
        stage.render(0, Direction::Still);
        let now = Instant::now();
        assert_eq!(stage.progress(now), 1.0);
        assert_eq!(stage.offset(now, 80), 0);
        assert_eq!(stage.dim(now), 0.0);
    }

    #[test]
    fn forward_slide_enters_from_the_right() {
        let mut stage = Stage::new(ms(400));
        stage.render(0, Direction::Still);
        stage.render(1, Direction::Forward);
        let t0 = Instant::now();
        assert_eq!(stage.offset(t0, 80), 80);
        assert_eq!(stage.dim(t0), 1.0);
        let mid = stage.offset(t0 + ms(200), 80);
        assert!(mid > 0 && mid < 80);
        assert_eq!(stage.offset(t0 + ms(400), 80), 0);
        assert_eq!(stage.offset(t0 + ms(10), 80), 0);
    }

    #[test]
    fn backward_slide_enters_from_the_left() {
        let mut stage = Stage::new(ms(400));
        stage.render(3, Direction::Backward);
        let t0 = Instant::now();
        assert_eq!(stage.offset(t0, 40), -40);
        assert!(stage.offset(t0 + ms(100), 40) < 0);
    }

    #[test]
    fn identical_render_is_idempotent() {
        let mut stage = Stage::new(ms(400));
        stage.render(0, Direction::Still);
        stage.render(2, Direction::Forward);
        let t0 = Instant::now();
        stage.progress(t0);
        stage.render(2, Direction::Forward);
        assert_eq!(stage.renders(), 2);
        assert!(stage.progress(t0 + ms(200)) > 0.0);
        assert_eq!(stage.progress(t0 + ms(400)), 1.0);
    }

    #[test]
    fn zero_duration_never_animates() {
        let mut stage = Stage::new(Duration::ZERO);
        stage.render(1, Direction::Forward);
        assert_eq!(stage.offset(Instant::now(), 80), 0);
    }
}
