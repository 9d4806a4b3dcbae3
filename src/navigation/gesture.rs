use super::{NavigateOutcome, Navigator, Presenter, SectionIndex, TrailingDebounce};
use log::*;
use std::time::{Duration, Instant};

/// Decision taken at the end of a wheel burst.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Advance,
    Retreat,
}

impl Gesture {
    /// Classify a burst total. Only magnitudes strictly above `threshold`
    /// count.
    ///
    pub fn from_sum(sum: f64, threshold: f64) -> Option<Self> {
        if sum.abs() <= threshold {
            None
        } else if sum > 0.0 {
            Some(Gesture::Advance)
        } else {
            Some(Gesture::Retreat)
        }
    }

    /// Neighbour section this gesture points at, if it exists.
    ///
    pub fn target(self, current: SectionIndex, section_count: usize) -> Option<SectionIndex> {
        match self {
            Gesture::Advance => current.checked_add(1).filter(|next| *next < section_count),
            Gesture::Retreat => current.checked_sub(1),
        }
    }
}

/// Folds bursts of wheel deltas into at most one navigation per quiet
/// period.
///
#[derive(Debug, Clone)]
pub struct GestureAggregator {
    debounce: TrailingDebounce,
    threshold: f64,
}

impl GestureAggregator {
    pub fn new(quiet_period: Duration, threshold: f64) -> Self {
        GestureAggregator {
            debounce: TrailingDebounce::new(quiet_period),
            threshold,
        }
    }

    /// Accumulate a delta unless a transition is running. Deltas seen during
    /// a transition are thrown away so they cannot fire right after the lock
    /// clears.
    ///
    pub fn on_wheel_delta<P: Presenter>(
        &mut self,
        delta: f64,
        navigator: &Navigator<P>,
        now: Instant,
    ) {
        if navigator.is_torn_down() || navigator.is_transitioning() {
            return;
        }
        if !delta.is_finite() {
            return;
        }
        self.debounce.push(delta, now);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Close the burst if its quiet period is over and issue at most one
    /// request.
    ///
    pub fn fire<P: Presenter>(
        &mut self,
        navigator: &mut Navigator<P>,
        now: Instant,
    ) -> Option<NavigateOutcome> {
        let sum = self.debounce.poll(now)?;
        let gesture = Gesture::from_sum(sum, self.threshold)?;
        let target = gesture.target(navigator.current_index(), navigator.section_count())?;
        trace!("Wheel burst of {:.1} resolved to {:?}", sum, gesture);
        Some(navigator.request_navigate(target, now))
    }

    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }

    #[cfg(test)]
    pub fn pending_sum(&self) -> f64 {
        self.debounce.sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    fn setup() -> (GestureAggregator, Navigator<RecordingPresenter>, Instant) {
        (
            GestureAggregator::new(ms(50), 50.0),
            Navigator::mount(7, ms(350), RecordingPresenter::default()),
            Instant::now(),
        )
    }

    #[test]
    fn classify_sum() {
        assert_eq!(Gesture::from_sum(60.0, 50.0), Some(Gesture::Advance));
        assert_eq!(Gesture::from_sum(-60.0, 50.0), Some(Gesture::Retreat));
        assert_eq!(Gesture::from_sum(50.0, 50.0), None);
        assert_eq!(Gesture::from_sum(-50.0, 50.0), None);
        assert_eq!(Gesture::from_sum(0.0, 50.0), None);
    }

    #[test]
    fn targets_stay_in_range() {
        assert_eq!(Gesture::Advance.target(0, 7), Some(1));
        assert_eq!(Gesture::Advance.target(6, 7), None);
        assert_eq!(Gesture::Retreat.target(0, 7), None);
        assert_eq!(Gesture::Retreat.target(3, 7), Some(2));
    }

    #[test]
    fn two_small_deltas_cross_threshold() {
        let (mut gesture, mut navigator, t0) = setup();
        gesture.on_wheel_delta(30.0, &navigator, t0);
        gesture.on_wheel_delta(30.0, &navigator, t0 + ms(10));
        assert_eq!(gesture.pending_sum(), 60.0);
        assert_eq!(gesture.fire(&mut navigator, t0 + ms(59)), None);
        assert_eq!(
            gesture.fire(&mut navigator, t0 + ms(60)),
            Some(NavigateOutcome::Accepted)
        );
        assert_eq!(navigator.current_index(), 1);
        assert_eq!(gesture.pending_sum(), 0.0);
    }

    #[test]
    fn undecided_burst_is_dropped_and_reset() {
        let (mut gesture, mut navigator, t0) = setup();
        gesture.on_wheel_delta(40.0, &navigator, t0);
        gesture.on_wheel_delta(-40.0, &navigator, t0 + ms(10));
        assert_eq!(gesture.fire(&mut navigator, t0 + ms(60)), None);
        assert_eq!(gesture.deadline(), None);
        // A partial burst does not carry over into the next one.
        gesture.on_wheel_delta(30.0, &navigator, t0 + ms(200));
        assert_eq!(gesture.fire(&mut navigator, t0 + ms(250)), None);
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn retreat_before_first_section_is_not_issued() {
        let (mut gesture, mut navigator, t0) = setup();
        gesture.on_wheel_delta(-200.0, &navigator, t0);
        assert_eq!(gesture.fire(&mut navigator, t0 + ms(50)), None);
        assert!(!navigator.is_transitioning());
    }

    #[test]
    fn deltas_during_transition_are_discarded() {
        let (mut gesture, mut navigator, t0) = setup();
        navigator.request_navigate(3, t0);
        gesture.on_wheel_delta(120.0, &navigator, t0 + ms(10));
        assert_eq!(gesture.deadline(), None);
        assert_eq!(gesture.pending_sum(), 0.0);
    }

    #[test]
    fn non_finite_deltas_are_ignored() {
        let (mut gesture, navigator, t0) = setup();
        gesture.on_wheel_delta(f64::NAN, &navigator, t0);
        gesture.on_wheel_delta(f64::INFINITY, &navigator, t0);
        assert_eq!(gesture.deadline(), None);
    }
}
