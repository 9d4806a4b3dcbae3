use super::{footer, indicator, log, navbar, section, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Render the whole screen according to state. Clickable areas are
/// registered anew on every frame.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    state.clear_clickables();
    let size = frame.size();
    frame.render_widget(
        Block::default().style(styling::background_style(state.theme())),
        size,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(size);

    navbar(frame, rows[0], state);
    section(frame, rows[1], state);
    indicator(frame, rows[2], state);
    footer(frame, rows[3], state);

    if state.is_log_visible() {
        log(frame, size, state);
    }
}
