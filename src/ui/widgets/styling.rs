use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Share of the way text fades into the background at full dim.
///
const MAX_FADE: f64 = 0.75;

/// Return the style filling the whole screen.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.background.to_color())
        .fg(theme.text.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text, faded towards the background by `dim`.
///
pub fn normal_text_style(theme: &Theme, dim: f64) -> Style {
    let color = theme.text.mix(&theme.background, dim * MAX_FADE);
    Style::default().fg(color.to_color())
}

pub fn secondary_text_style(theme: &Theme, dim: f64) -> Style {
    let color = theme.text_secondary.mix(&theme.background, dim * MAX_FADE);
    Style::default().fg(color.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for section headings.
///
pub fn heading_style(theme: &Theme, dim: f64) -> Style {
    normal_text_style(theme, dim).add_modifier(Modifier::BOLD)
}

/// Return the style for accented text (markers, metrics, links).
///
pub fn accent_style(theme: &Theme, dim: f64) -> Style {
    let color = theme.primary.mix(&theme.background, dim * MAX_FADE);
    Style::default().fg(color.to_color())
}

/// Return the style for the brand.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for call-to-action buttons.
///
pub fn button_style(theme: &Theme, primary: bool) -> Style {
    if primary {
        Style::default()
            .fg(theme.background.to_color())
            .bg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD)
    }
}
