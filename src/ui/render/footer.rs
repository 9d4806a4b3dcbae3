use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph};

/// Render the key help line.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let text = state.footer_text();
    let paragraph =
        Paragraph::new(Line::from(text)).style(styling::muted_text_style(state.theme()));
    frame.render_widget(paragraph, size);
}
