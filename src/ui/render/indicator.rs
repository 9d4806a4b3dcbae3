use super::{text_width, Frame};
use crate::state::{ClickTarget, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const PREVIOUS: &str = "‹";
const NEXT: &str = "›";

/// Render the position readout with arrows to the neighbouring sections.
///
pub fn indicator(frame: &mut Frame, size: Rect, state: &mut State) {
    let nav = state.navigation_state();
    let readout = format!("  {}  ", state.readout());
    let previous = nav.current_index.checked_sub(1);
    let next = Some(nav.current_index + 1).filter(|index| *index < state.section_count());

    let width = text_width(PREVIOUS) + text_width(&readout) + text_width(NEXT);
    if size.width < width || size.height == 0 {
        return;
    }
    let x = size.x + (size.width - width) / 2;

    let theme = state.theme().clone();
    let arrow_style = |enabled: bool| {
        if enabled {
            styling::accent_style(&theme, 0.0)
        } else {
            styling::muted_text_style(&theme)
        }
    };
    let line = Line::from(vec![
        Span::styled(PREVIOUS, arrow_style(previous.is_some())),
        Span::styled(readout, styling::secondary_text_style(&theme, 0.0)),
        Span::styled(NEXT, arrow_style(next.is_some())),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(x, size.y, width, 1));

    if let Some(index) = previous {
        state.register_clickable(
            Rect::new(x, size.y, text_width(PREVIOUS), 1),
            ClickTarget::Section(index),
        );
    }
    if let Some(index) = next {
        state.register_clickable(
            Rect::new(x + width - text_width(NEXT), size.y, text_width(NEXT), 1),
            ClickTarget::Section(index),
        );
    }
}
