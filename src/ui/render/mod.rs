mod all;
mod footer;
mod indicator;
mod log;
mod navbar;
mod section;

use self::log::log;
use super::*;
use footer::footer;
use indicator::indicator;
use navbar::navbar;
use ratatui::layout::Rect;
use section::section;

pub use all::all as render;

/// Rect of at most `width` x `height` centred in `area`.
///
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Width of `text` in terminal columns.
///
fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
