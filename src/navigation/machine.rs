use super::{Direction, NavigateOutcome, NavigationState, Presenter, SectionIndex};
use log::*;
use std::time::{Duration, Instant};

/// Owner of the navigation state and the transition lock.
///
/// A request is accepted only while idle and only for a valid section other
/// than the current one. Accepting a request takes the lock until the settle
/// deadline passes; everything submitted meanwhile is dropped, not queued.
///
pub struct Navigator<P: Presenter> {
    state: NavigationState,
    section_count: usize,
    settle_delay: Duration,
    settle_at: Option<Instant>,
    torn_down: bool,
    presenter: P,
}

impl<P: Presenter> Navigator<P> {
    /// Create the navigator on the first section and render it. A section
    /// count of zero is raised to one.
    ///
    pub fn mount(section_count: usize, settle_delay: Duration, mut presenter: P) -> Self {
        let state = NavigationState::default();
        presenter.render(state.current_index, state.direction);
        Navigator {
            state,
            section_count: section_count.max(1),
            settle_delay,
            settle_at: None,
            torn_down: false,
            presenter,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> SectionIndex {
        self.state.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Try to move to `target`, starting the settle timer on success.
    ///
    pub fn request_navigate(&mut self, target: SectionIndex, now: Instant) -> NavigateOutcome {
        if self.torn_down {
            return NavigateOutcome::TornDown;
        }
        if target >= self.section_count {
            warn!(
                "Ignoring navigation to section {} (only {} sections)",
                target, self.section_count
            );
            return NavigateOutcome::OutOfRange;
        }
        if self.state.is_transitioning {
            trace!("Navigation to section {} dropped while transitioning", target);
            return NavigateOutcome::Busy;
        }
        if target == self.state.current_index {
            return NavigateOutcome::AlreadyCurrent;
        }

        let direction = Direction::between(self.state.current_index, target);
        debug!(
            "Navigating from section {} to {} ({:?})",
            self.state.current_index, target, direction
        );
        self.state = NavigationState {
            current_index: target,
            direction,
            is_transitioning: true,
        };
        self.presenter.render(target, direction);
        self.settle_at = Some(now + self.settle_delay);
        NavigateOutcome::Accepted
    }

    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_at
    }

    /// Release the lock if the settle deadline has passed. Returns whether
    /// it fired.
    ///
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.settle_at {
            Some(at) if at <= now => {
                self.settle_at = None;
                self.state.is_transitioning = false;
                trace!("Transition to section {} settled", self.state.current_index);
                true
            }
            _ => false,
        }
    }

    /// Cancel the settle timer. The state is frozen from here on.
    ///
    pub fn teardown(&mut self) {
        self.settle_at = None;
        self.torn_down = true;
    }

    /// One-based position readout, e.g. `02 / 07`.
    ///
    pub fn readout(&self) -> String {
        format!(
            "{:02} / {:02}",
            self.state.current_index + 1,
            self.section_count
        )
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
