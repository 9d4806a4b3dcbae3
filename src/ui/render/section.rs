use super::{text_width, Frame};
use crate::content::{
    self, Item, Layout as SectionLayout, Section, HERO_ACTIONS, PROJECTS_NEXT, PROMPT_PLACEHOLDER,
};
use crate::state::{ClickTarget, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const CURSOR: &str = "▌";
const BUTTON_GAP: u16 = 2;

/// Render the section the stage is showing, slid and dimmed according to
/// the running transition.
///
pub fn section(frame: &mut Frame, size: Rect, state: &mut State) {
    let section = match state.current_section() {
        Some(section) => section,
        None => return,
    };
    let now = state.now();
    let stage = state.stage_mut();
    let offset = stage.offset(now, size.width);
    let dim = stage.dim(now);

    let area = slide(size, offset);
    let area = Layout::default()
        .constraints([Constraint::Min(0)].as_ref())
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(area)[0];
    if area.width < 4 || area.height < 2 {
        return;
    }

    let theme = state.theme().clone();
    match section.layout {
        SectionLayout::Hero => hero(frame, area, state, &theme, section, dim),
        SectionLayout::MasterDetail => {
            let body = header(frame, area, &theme, section, dim);
            master_detail(frame, body, state, &theme, section.items, dim);
        }
        SectionLayout::Grid => {
            let body = header(frame, area, &theme, section, dim);
            grid(frame, body, &theme, section.items, dim);
        }
        SectionLayout::List => {
            let body = header(frame, area, &theme, section, dim);
            list(frame, body, &theme, section.items, dim);
        }
        SectionLayout::Contact => {
            let body = header(frame, area, &theme, section, dim);
            contact(frame, body, state, &theme, section.items, dim);
        }
    }
}

/// Shift `area` by `offset` columns, clipping whatever leaves it.
///
fn slide(area: Rect, offset: i32) -> Rect {
    let shift = u16::try_from(offset.unsigned_abs())
        .unwrap_or(u16::MAX)
        .min(area.width);
    if offset > 0 {
        Rect::new(area.x + shift, area.y, area.width - shift, area.height)
    } else {
        Rect::new(area.x, area.y, area.width - shift, area.height)
    }
}

/// Rows `text` needs when wrapped to `width`.
///
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    text_width(text) / width + 1
}

/// Render marker, heading and intro. Returns the area left for the body.
///
fn header(frame: &mut Frame, area: Rect, theme: &Theme, section: &Section, dim: f64) -> Rect {
    let mut lines = vec![
        Line::from(Span::styled(section.marker, styling::accent_style(theme, dim))),
        Line::from(Span::styled(
            section.heading,
            styling::heading_style(theme, dim),
        )),
    ];
    let mut height = 2;
    if let Some(intro) = section.intro {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            intro,
            styling::secondary_text_style(theme, dim),
        )));
        height += 1 + wrapped_height(intro, area.width);
    }
    let height = (height + 1).min(area.height);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        Rect::new(area.x, area.y, area.width, height),
    );
    Rect::new(
        area.x,
        area.y + height,
        area.width,
        area.height - height,
    )
}

fn hero(
    frame: &mut Frame,
    area: Rect,
    state: &mut State,
    theme: &Theme,
    section: &Section,
    dim: f64,
) {
    let elapsed = state.elapsed();
    let subtitle = state.subtitle();
    let cursor = if subtitle.cursor_visible(elapsed) {
        CURSOR
    } else {
        " "
    };
    let typed = subtitle.visible(elapsed);
    let intro = section.intro.unwrap_or_default();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(wrapped_height(intro, area.width)),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("> {}", section.marker),
            styling::accent_style(theme, dim),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            section.heading,
            styling::heading_style(theme, dim),
        )),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(typed, styling::secondary_text_style(theme, dim)),
            Span::styled(cursor, styling::accent_style(theme, dim)),
        ])),
        rows[4],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(intro, styling::normal_text_style(theme, dim)))
            .wrap(Wrap { trim: true }),
        rows[6],
    );

    let button_row = rows[8];
    if button_row.height == 0 {
        return;
    }
    let mut x = button_row.x;
    for (index, action) in HERO_ACTIONS.iter().enumerate() {
        let label = format!("[ {} ]", action.label);
        let width = text_width(&label);
        if x + width > button_row.x + button_row.width {
            break;
        }
        let button = Rect::new(x, button_row.y, width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(label, styling::button_style(theme, index == 0))),
            button,
        );
        state.register_clickable(button, ClickTarget::Section(action.target));
        x += width + BUTTON_GAP;
    }
}

fn master_detail(
    frame: &mut Frame,
    area: Rect,
    state: &mut State,
    theme: &Theme,
    items: &[Item],
    dim: f64,
) {
    if area.height < 4 {
        return;
    }
    let link_label = format!("{} ›", PROJECTS_NEXT.label);
    let link_width = text_width(&link_label).min(area.width);
    let link = Rect::new(
        area.x + area.width - link_width,
        area.y + area.height - 1,
        link_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(link_label, styling::accent_style(theme, dim))),
        link,
    );
    state.register_clickable(link, ClickTarget::Section(PROJECTS_NEXT.target));

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(Rect::new(area.x, area.y, area.width, area.height - 1));

    let selected = state.selected_project().min(items.len().saturating_sub(1));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(columns[0]);
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(Span::styled(
                item.title,
                styling::normal_text_style(theme, dim),
            )))
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(
        List::new(list_items)
            .block(block)
            .highlight_style(styling::active_list_item_style(theme))
            .highlight_symbol("› "),
        columns[0],
        &mut list_state,
    );
    for index in 0..items.len().min(usize::from(inner.height)) {
        state.register_clickable(
            Rect::new(inner.x, inner.y + index as u16, inner.width, 1),
            ClickTarget::Project(index),
        );
    }

    if let Some(item) = items.get(selected) {
        let detail = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(item.title, styling::active_block_title_style()));
        let lines = vec![
            Line::from(Span::styled(item.meta, styling::accent_style(theme, dim))),
            Line::default(),
            Line::from(Span::styled(
                item.detail,
                styling::normal_text_style(theme, dim),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(detail)
                .wrap(Wrap { trim: true }),
            columns[1],
        );
    }
}

fn item_lines<'a>(item: &'a Item, theme: &Theme, dim: f64) -> Vec<Line<'a>> {
    let mut lines = vec![];
    if !item.meta.is_empty() {
        lines.push(Line::from(Span::styled(
            item.meta,
            styling::accent_style(theme, dim),
        )));
    }
    if !item.detail.is_empty() {
        lines.push(Line::from(Span::styled(
            item.detail,
            styling::secondary_text_style(theme, dim),
        )));
    }
    lines
}

fn grid(frame: &mut Frame, area: Rect, theme: &Theme, items: &[Item], dim: f64) {
    let row_count = (items.len() + 1) / 2;
    if row_count == 0 || area.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);
    for (row, pair) in rows.iter().zip(items.chunks(2)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(*row);
        for (cell, item) in cells.iter().zip(pair) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme))
                .title(Span::styled(item.title, styling::heading_style(theme, dim)));
            frame.render_widget(
                Paragraph::new(item_lines(item, theme, dim))
                    .block(block)
                    .wrap(Wrap { trim: true }),
                *cell,
            );
        }
    }
}

fn list(frame: &mut Frame, area: Rect, theme: &Theme, items: &[Item], dim: f64) {
    let mut lines = vec![];
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(item.title, styling::heading_style(theme, dim)),
            Span::raw("  "),
            Span::styled(item.meta, styling::muted_text_style(theme)),
        ]));
        lines.push(Line::from(Span::styled(
            item.detail,
            styling::secondary_text_style(theme, dim),
        )));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn contact(
    frame: &mut Frame,
    area: Rect,
    state: &mut State,
    theme: &Theme,
    items: &[Item],
    dim: f64,
) {
    let label_width = items
        .iter()
        .map(|item| text_width(item.title))
        .max()
        .unwrap_or(0) as usize
        + 2;
    let links: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", item.title, width = label_width),
                    styling::normal_text_style(theme, dim),
                ),
                Span::styled(item.meta, styling::accent_style(theme, dim)),
            ])
        })
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(items.len() as u16),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    prompt(frame, rows[0], state, theme, dim);
    frame.render_widget(Paragraph::new(links), rows[2]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", styling::accent_style(theme, dim)),
            Span::styled(content::BRAND.concat(), styling::muted_text_style(theme)),
        ])),
        rows[4],
    );
}

/// Message field with its send button. Both register as clickable.
///
fn prompt(frame: &mut Frame, area: Rect, state: &mut State, theme: &Theme, dim: f64) {
    if area.height < 3 {
        return;
    }
    let input = state.prompt();
    let button_label = if input.is_submitting() {
        "[ Sending... ]"
    } else {
        "[ Send ]"
    };
    let button_width = text_width(button_label);
    if area.width < button_width + BUTTON_GAP + 8 {
        return;
    }
    let focused = state.is_prompt_focused();
    let cursor = if focused && state.subtitle().cursor_visible(state.elapsed()) {
        CURSOR
    } else {
        " "
    };
    let text = if input.text().is_empty() && !focused {
        Span::styled(PROMPT_PLACEHOLDER, styling::muted_text_style(theme))
    } else {
        Span::styled(input.text().to_string(), styling::normal_text_style(theme, dim))
    };
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let can_submit = input.can_submit();

    let field = Rect::new(
        area.x,
        area.y,
        area.width - button_width - BUTTON_GAP,
        3,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("$ ", styling::accent_style(theme, dim)),
            text,
            Span::styled(cursor, styling::accent_style(theme, dim)),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(border_style)),
        field,
    );
    state.register_clickable(field, ClickTarget::Prompt);

    let button = Rect::new(field.x + field.width + BUTTON_GAP, area.y + 1, button_width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            button_label,
            styling::button_style(theme, can_submit),
        )),
        button,
    );
    state.register_clickable(button, ClickTarget::SubmitPrompt);
}
