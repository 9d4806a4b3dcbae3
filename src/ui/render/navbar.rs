use super::{text_width, Frame};
use crate::content::{self, BRAND, NAV_ITEMS};
use crate::state::{ClickTarget, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const ITEM_GAP: u16 = 3;

/// Glyph of the theme toggle, naming the theme in use: a moon while dark.
///
fn theme_glyph(theme: &Theme) -> &'static str {
    if theme.is_dark() {
        "☾"
    } else {
        "☀"
    }
}

/// Render the top bar: brand on the left, section links and the theme
/// toggle on the right.
///
pub fn navbar(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styling::normal_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);
    if inner.height == 0 {
        return;
    }
    let row = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);

    let theme_glyph = theme_glyph(&theme);
    let links_width = NAV_ITEMS
        .iter()
        .map(|item| text_width(item.label) + ITEM_GAP)
        .sum::<u16>()
        + text_width(theme_glyph);
    let brand_width = BRAND.iter().map(|part| text_width(part)).sum::<u16>();

    if brand_width + ITEM_GAP + links_width <= row.width {
        let brand = Line::from(vec![
            Span::styled(BRAND[0], styling::banner_style(&theme)),
            Span::styled(BRAND[1], styling::muted_text_style(&theme)),
            Span::styled(BRAND[2], styling::heading_style(&theme, 0.0)),
        ]);
        frame.render_widget(
            Paragraph::new(brand),
            Rect::new(row.x, row.y, brand_width, 1),
        );
    }
    if links_width > row.width {
        return;
    }

    let active = content::active_nav_index(state.navigation_state().current_index);
    let mut x = row.x + row.width - links_width;
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let style = if index == active {
            styling::active_list_item_style(&theme)
        } else {
            styling::secondary_text_style(&theme, 0.0)
        };
        let area = Rect::new(x, row.y, text_width(item.label), 1);
        frame.render_widget(Paragraph::new(Span::styled(item.label, style)), area);
        state.register_clickable(area, ClickTarget::Section(item.target));
        x += text_width(item.label) + ITEM_GAP;
    }

    let toggle = Rect::new(x, row.y, text_width(theme_glyph), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(theme_glyph, styling::accent_style(&theme, 0.0))),
        toggle,
    );
    state.register_clickable(toggle, ClickTarget::ToggleTheme);
}
