//! Headline bucket panels

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use report_data::Bucket;

use super::{C_ACCENT, C_BRIGHT, C_DIM};
use crate::screen::HeadlineList;

/// Render one headline bucket. The focused panel gets an accent border and a
/// highlighted cursor row.
pub fn render_headlines_panel(
    f: &mut Frame,
    area: Rect,
    bucket: Bucket,
    list: &HeadlineList,
    focused: bool,
) {
    let border_color = if focused { C_ACCENT } else { C_DIM };
    let block = Block::default()
        .title(format!(" {} ({}) ", bucket.title(), list.rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if list.rows.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("No headlines", Style::default().fg(C_DIM)))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = list
        .rows
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(Span::styled(row.title.clone(), Style::default().fg(C_BRIGHT))),
                Line::from(Span::styled(format!("  {}", row.meta), Style::default().fg(C_DIM))),
            ])
        })
        .collect();

    let highlight = if focused {
        Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let widget = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default().with_selected(focused.then_some(list.selected));
    f.render_stateful_widget(widget, area, &mut state);
}
