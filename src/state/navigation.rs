//! Pointer hit-testing types.
//!
//! Widgets register the screen areas they drew for clickable elements; a
//! mouse press is resolved against the areas of the last frame.

use crate::navigation::SectionIndex;
use ratatui::layout::Rect;

/// What a click on a registered area does.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClickTarget {
    Section(SectionIndex),
    Project(usize),
    ToggleTheme,
    /// Focus the contact message field.
    Prompt,
    SubmitPrompt,
}

/// A clickable area from the last drawn frame.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Clickable {
    pub area: Rect,
    pub target: ClickTarget,
}

impl Clickable {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}
