use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the log overlay on top of the screen.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme();
    let area = centered_rect(
        size,
        size.width.saturating_mul(4) / 5,
        size.height.saturating_mul(3) / 5,
    );
    let log_buffer = state.log_buffer();
    let title = format!("Log: {} entries (d: close)", log_buffer.len());
    let block = Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .style(styling::background_style(theme));

    let visible = usize::from(area.height.saturating_sub(2));
    if log_buffer.is_empty() {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing logged yet",
                styling::muted_text_style(theme),
            ))
            .block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = log_buffer
        .tail(visible)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry,
                styling::normal_text_style(theme, 0.0),
            )]))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(List::new(items).block(block), area);
}
