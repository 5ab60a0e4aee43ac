//! Footer lines: selected link preview and status bar

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use report_data::view::HeadlineRow;

use super::{C_ACCENT, C_BRIGHT, C_BUY, C_DIM, C_NEUTRAL};
use crate::{
    refresh::RefreshState,
    screen::{RegionId, Screen},
};

/// Link of the selected headline; links are shown, never followed.
pub fn render_detail_line(f: &mut Frame, area: Rect, selected: Option<&HeadlineRow>) {
    let line = match selected {
        Some(row) if !row.link.is_empty() => Line::from(vec![
            Span::styled(" ↗ ", Style::default().fg(C_ACCENT)),
            Span::styled(row.link.clone(), Style::default().fg(C_BRIGHT)),
        ]),
        _ => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Title, refresh state, last updated and key hints
pub fn render_status_bar(f: &mut Frame, area: Rect, screen: &Screen, refresh: RefreshState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (state_text, state_color) = match refresh {
        RefreshState::Idle => ("● LIVE", C_BUY),
        RefreshState::Refreshing => ("⟳ REFRESHING", C_NEUTRAL),
    };

    let mut left = vec![
        Span::styled(
            " THE BLAIR REPORT ",
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(state_text, Style::default().fg(state_color)),
    ];
    if let Some(updated) = screen.text(RegionId::LastUpdated).filter(|text| !text.is_empty()) {
        left.push(Span::styled(
            format!("  Last updated: {updated}"),
            Style::default().fg(C_DIM),
        ));
    }

    let mut right = vec![Span::styled(
        "q quit  r refresh  tab focus  ↑↓ select ",
        Style::default().fg(C_DIM),
    )];
    if let Some(year) = screen.text(RegionId::Year).filter(|text| !text.is_empty()) {
        right.insert(0, Span::styled(format!("© {year}  "), Style::default().fg(C_DIM)));
    }

    f.render_widget(Paragraph::new(Line::from(left)), halves[0]);
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(ratatui::layout::Alignment::Right),
        halves[1],
    );
}
