use super::{NavigateOutcome, Navigator, Presenter};
use std::time::Instant;

/// Directional key presses understood by the engine.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Forward,
    Backward,
    First,
    Last,
}

impl NavKey {
    /// Evaluate the press immediately. Returns `None` when no request was
    /// issued (transition running or already at the boundary).
    ///
    pub fn apply<P: Presenter>(
        self,
        navigator: &mut Navigator<P>,
        now: Instant,
    ) -> Option<NavigateOutcome> {
        if navigator.is_transitioning() {
            return None;
        }
        let current = navigator.current_index();
        let last = navigator.section_count() - 1;
        let target = match self {
            NavKey::Forward if current < last => current + 1,
            NavKey::Backward if current > 0 => current - 1,
            NavKey::First if current != 0 => 0,
            NavKey::Last if current != last => last,
            _ => return None,
        };
        Some(navigator.request_navigate(target, now))
    }
}
