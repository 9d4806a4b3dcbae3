//! Section navigation engine.
//!
//! This module turns noisy terminal input into a serialized stream of
//! section changes:
//! - `machine`: the state machine that owns the current section and the
//!   transition lock
//! - `debounce`: a trailing debounce that sums values over a burst
//! - `gesture`: wheel aggregation on top of the debounce
//! - `keys`: immediate mapping of directional key presses
//!
//! Time is never read from the system clock here. Every operation takes the
//! current `Instant`, and timers are deadlines fired by [`Engine::tick`].

mod debounce;
mod gesture;
mod keys;
mod machine;

pub use debounce::TrailingDebounce;
pub use gesture::{Gesture, GestureAggregator};
pub use keys::NavKey;
pub use machine::Navigator;

use std::time::{Duration, Instant};

/// Position of a section in the ordered deck.
///
pub type SectionIndex = usize;

/// Default time the transition lock stays held.
///
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 350;

/// Default quiet period closing a wheel burst.
///
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 50;

/// Default magnitude a wheel burst must exceed to navigate.
///
pub const DEFAULT_WHEEL_THRESHOLD: f64 = 50.0;

/// Direction of travel between two sections.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Direction of travel from one section to another.
    ///
    pub fn between(from: SectionIndex, to: SectionIndex) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
        }
    }

    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Snapshot of the navigation state. Only [`Navigator`] writes it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: SectionIndex,
    pub direction: Direction,
    pub is_transitioning: bool,
}

/// Result of a navigation request.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    Accepted,
    Busy,
    AlreadyCurrent,
    OutOfRange,
    TornDown,
}

impl NavigateOutcome {
    #[cfg(test)]
    pub fn is_accepted(self) -> bool {
        self == NavigateOutcome::Accepted
    }
}

/// Tunables of the engine.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub section_count: usize,
    pub settle_delay: Duration,
    pub quiet_period: Duration,
    pub wheel_threshold: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            section_count: crate::content::SECTION_COUNT,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            quiet_period: Duration::from_millis(DEFAULT_QUIET_PERIOD_MS),
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
        }
    }
}

/// The presentation side of a section change. Calls with identical
/// arguments must be idempotent; `Direction::Still` renders without
/// animation.
///
pub trait Presenter {
    fn render(&mut self, index: SectionIndex, direction: Direction);
}

/// Composes the state machine with both input sources and drives their
/// timers from a single clock.
///
/// Dropping the engine discards both deadlines with it, so nothing can fire
/// against a destroyed state.
pub struct Engine<P: Presenter> {
    navigator: Navigator<P>,
    gesture: GestureAggregator,
}

impl<P: Presenter> Engine<P> {
    /// Mount the engine on the first section. The presenter receives
    /// `render(0, Still)` immediately.
    ///
    pub fn mount(config: &NavigationConfig, presenter: P) -> Self {
        Engine {
            navigator: Navigator::mount(config.section_count, config.settle_delay, presenter),
            gesture: GestureAggregator::new(config.quiet_period, config.wheel_threshold),
        }
    }

    /// The only entry point for direct jumps (menu clicks, arrows).
    ///
    pub fn request_navigate(&mut self, target: SectionIndex, now: Instant) -> NavigateOutcome {
        self.navigator.request_navigate(target, now)
    }

    /// Feed one wheel delta. Positive values advance.
    ///
    pub fn on_wheel_delta(&mut self, delta: f64, now: Instant) {
        self.gesture.on_wheel_delta(delta, &self.navigator, now);
    }

    /// Feed one directional key press.
    ///
    pub fn on_key(&mut self, key: NavKey, now: Instant) -> Option<NavigateOutcome> {
        key.apply(&mut self.navigator, now)
    }

    /// Fire every deadline that is due at `now`, earliest first. A settle
    /// and a quiet deadline falling on the same instant release the lock
    /// before the gesture is judged.
    ///
    pub fn tick(&mut self, now: Instant) {
        loop {
            let settle = self.navigator.settle_deadline().filter(|at| *at <= now);
            let quiet = self.gesture.deadline().filter(|at| *at <= now);
            match (settle, quiet) {
                (Some(settle_at), Some(quiet_at)) if quiet_at < settle_at => {
                    self.gesture.fire(&mut self.navigator, quiet_at);
                }
                (Some(settle_at), _) => {
                    self.navigator.settle(settle_at);
                }
                (None, Some(quiet_at)) => {
                    self.gesture.fire(&mut self.navigator, quiet_at);
                }
                (None, None) => break,
            }
        }
    }

    /// Cancel both timers and stop accepting input.
    ///
    pub fn teardown(&mut self) {
        self.gesture.cancel();
        self.navigator.teardown();
    }

    /// Earliest pending deadline, if any.
    ///
    #[cfg(test)]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.navigator.settle_deadline(), self.gesture.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn section_count(&self) -> usize {
        self.navigator.section_count()
    }

    pub fn readout(&self) -> String {
        self.navigator.readout()
    }

    pub fn is_torn_down(&self) -> bool {
        self.navigator.is_torn_down()
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        self.navigator.presenter()
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        self.navigator.presenter_mut()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use fake::Fake;

    fn engine() -> (Engine<RecordingPresenter>, Instant) {
        (
            Engine::mount(&config(7), RecordingPresenter::default()),
            Instant::now(),
        )
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between(1, 4), Direction::Forward);
        assert_eq!(Direction::between(4, 1), Direction::Backward);
        assert_eq!(Direction::between(2, 2), Direction::Still);
        assert_eq!(Direction::Forward.signum(), 1);
        assert_eq!(Direction::Backward.signum(), -1);
        assert_eq!(Direction::Still.signum(), 0);
    }

    #[test]
    fn mount_renders_first_section_without_animation() {
        let (engine, _) = engine();
        assert_eq!(engine.presenter().calls, vec![(0, Direction::Still)]);
        assert_eq!(
            engine.state(),
            NavigationState {
                current_index: 0,
                direction: Direction::Still,
                is_transitioning: false,
            }
        );
    }

    #[test]
    fn requests_faster_than_settle_delay_yield_one_transition() {
        let (mut engine, t0) = engine();
        assert_eq!(engine.request_navigate(2, t0), NavigateOutcome::Accepted);
        engine.tick(t0 + ms(10));
        assert_eq!(engine.request_navigate(3, t0 + ms(10)), NavigateOutcome::Busy);
        engine.tick(t0 + ms(20));
        assert_eq!(engine.request_navigate(4, t0 + ms(20)), NavigateOutcome::Busy);
        engine.tick(t0 + ms(400));
        assert_eq!(engine.state().current_index, 2);
        assert_eq!(engine.presenter().calls.len(), 2);
    }

    #[test]
    fn lock_releases_exactly_at_settle_deadline() {
        let (mut engine, t0) = engine();
        engine.request_navigate(3, t0);
        engine.tick(t0 + ms(349));
        assert!(engine.state().is_transitioning);
        engine.tick(t0 + ms(350));
        assert!(!engine.state().is_transitioning);
        assert_eq!(engine.request_navigate(5, t0 + ms(351)), NavigateOutcome::Accepted);
        assert_eq!(engine.state().current_index, 5);
    }

    #[test]
    fn wheel_burst_advances_once_after_quiet_period() {
        let (mut engine, t0) = engine();
        engine.on_wheel_delta(30.0, t0);
        engine.on_wheel_delta(30.0, t0 + ms(20));
        engine.tick(t0 + ms(60));
        assert_eq!(engine.state().current_index, 0);
        engine.tick(t0 + ms(70));
        assert_eq!(engine.state().current_index, 1);
        assert_eq!(engine.state().direction, Direction::Forward);
        engine.tick(t0 + ms(1_000));
        assert_eq!(engine.presenter().calls, vec![(0, Direction::Still), (1, Direction::Forward)]);
    }

    #[test]
    fn cancelling_wheel_burst_does_not_navigate() {
        let (mut engine, t0) = engine();
        engine.on_wheel_delta(40.0, t0);
        engine.on_wheel_delta(-40.0, t0 + ms(10));
        engine.tick(t0 + ms(500));
        assert_eq!(engine.state().current_index, 0);
        assert_eq!(engine.presenter().calls.len(), 1);
    }

    #[test]
    fn wheel_during_transition_does_not_build_backlog() {
        let (mut engine, t0) = engine();
        engine.request_navigate(1, t0);
        for step in 0..10u64 {
            engine.on_wheel_delta(80.0, t0 + ms(step * 30));
            engine.tick(t0 + ms(step * 30));
        }
        engine.tick(t0 + ms(2_000));
        assert_eq!(engine.state().current_index, 1);
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn late_tick_settles_before_judging_a_later_gesture() {
        let (mut engine, t0) = engine();
        engine.request_navigate(1, t0);
        engine.tick(t0 + ms(350));
        engine.on_wheel_delta(100.0, t0 + ms(360));
        // The engine is idle, so a single late tick fires the gesture.
        engine.tick(t0 + ms(900));
        assert_eq!(engine.state().current_index, 2);
        // The settle deadline for the gesture's transition has passed too.
        assert!(!engine.state().is_transitioning);
    }

    #[test]
    fn quiet_deadline_firing_while_locked_is_dropped() {
        let (mut engine, t0) = engine();
        engine.on_wheel_delta(100.0, t0);
        engine.on_key(NavKey::Forward, t0 + ms(10));
        engine.tick(t0 + ms(60));
        assert_eq!(engine.state().current_index, 1);
        engine.tick(t0 + ms(1_000));
        assert_eq!(engine.state().current_index, 1);
    }

    #[test]
    fn forward_key_at_last_section_issues_nothing() {
        let (mut engine, t0) = engine();
        engine.request_navigate(6, t0);
        engine.tick(t0 + ms(400));
        assert_eq!(engine.on_key(NavKey::Forward, t0 + ms(400)), None);
        engine.on_wheel_delta(500.0, t0 + ms(400));
        engine.tick(t0 + ms(500));
        assert_eq!(engine.state().current_index, 6);
        assert_eq!(engine.presenter().calls.len(), 2);
    }

    #[test]
    fn teardown_before_settle_freezes_state() {
        let (mut engine, t0) = engine();
        engine.request_navigate(2, t0);
        engine.on_wheel_delta(-90.0, t0 + ms(5));
        engine.teardown();
        assert_eq!(engine.next_deadline(), None);
        engine.tick(t0 + ms(1_000));
        let frozen = engine.state();
        assert!(frozen.is_transitioning);
        assert_eq!(frozen.current_index, 2);
        assert_eq!(engine.request_navigate(4, t0 + ms(1_000)), NavigateOutcome::TornDown);
        assert_eq!(engine.on_key(NavKey::Backward, t0 + ms(1_000)), None);
        engine.on_wheel_delta(-90.0, t0 + ms(1_000));
        engine.tick(t0 + ms(2_000));
        assert_eq!(engine.state(), frozen);
        assert_eq!(engine.presenter().calls.len(), 2);
    }

    #[test]
    fn readout_tracks_current_section() {
        let (mut engine, t0) = engine();
        assert_eq!(engine.readout(), "01 / 07");
        engine.request_navigate(1, t0);
        assert_eq!(engine.readout(), "02 / 07");
    }

    #[test]
    fn random_input_never_leaves_valid_range() {
        let (mut engine, t0) = engine();
        let mut now = t0;
        for _ in 0..2_000 {
            now += ms((0..40u64).fake::<u64>());
            match (0..4u8).fake::<u8>() {
                0 => engine.on_wheel_delta((-120.0..120.0).fake::<f64>(), now),
                1 => {
                    engine.on_key(NavKey::Forward, now);
                }
                2 => {
                    engine.on_key(NavKey::Backward, now);
                }
                _ => {
                    engine.request_navigate((0..7usize).fake::<usize>(), now);
                }
            }
            engine.tick(now);
            let state = engine.state();
            assert!(state.current_index < 7);
            if state.is_transitioning {
                assert!(engine.next_deadline().is_some());
            }
        }
        let calls = &engine.presenter().calls;
        for pair in calls.windows(2) {
            let (from, _) = pair[0];
            let (to, direction) = pair[1];
            assert_ne!(from, to);
            assert_eq!(direction, Direction::between(from, to));
        }
    }
}
