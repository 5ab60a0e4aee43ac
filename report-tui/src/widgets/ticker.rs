//! Scrolling price ticker strip

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{C_ACCENT, C_BRIGHT, C_DIM};
use crate::screen::TickerState;

/// Render the ticker panel at its current animation offset
pub fn render_ticker_panel(f: &mut Frame, area: Rect, state: &TickerState, elapsed: Duration) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = match &state.track {
        Some(track) => Line::from(Span::styled(
            track.window(elapsed, inner.width as usize),
            Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled("Waiting for prices...", Style::default().fg(C_DIM))),
    };

    f.render_widget(Paragraph::new(line), inner);
}
