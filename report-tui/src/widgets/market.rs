//! Market movers tables and sentiment indicator

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use report_data::view::{MarketRow, Sentiment, Tone};

use super::{C_ACCENT, C_BRIGHT, C_BUY, C_DIM, C_NEUTRAL, C_SELL};

fn tone_color(tone: Tone) -> ratatui::style::Color {
    match tone {
        Tone::Positive => C_BUY,
        Tone::Negative => C_SELL,
    }
}

/// Render a gainers or losers table
pub fn render_movers_table(f: &mut Frame, area: Rect, title: &str, rows: &[MarketRow]) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    if rows.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("No data", Style::default().fg(C_DIM)))),
            inner,
        );
        return;
    }

    let header = Row::new(vec!["#", "COIN", "PRICE", "24H", "MCAP"])
        .style(Style::default().fg(C_DIM).add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::styled(row.rank.clone(), Style::default().fg(C_DIM)),
                Span::styled(
                    row.symbol.clone(),
                    Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(row.price.clone(), Style::default().fg(C_BRIGHT)),
                Span::styled(row.change.clone(), Style::default().fg(tone_color(row.tone))),
                Span::styled(row.market_cap.clone(), Style::default().fg(C_DIM)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(10),
    ];
    let table = Table::new(body, widths).header(header).block(block);
    f.render_widget(table, area);
}

/// Render the sentiment indicator
pub fn render_sentiment_panel(f: &mut Frame, area: Rect, sentiment: Option<Sentiment>) {
    let block = Block::default()
        .title(" MARKET SENTIMENT ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    let line = match sentiment {
        Some(sentiment) => {
            let (arrow, color) = if sentiment.is_bullish() {
                ("▲", C_BUY)
            } else {
                ("▼", C_SELL)
            };
            Line::from(Span::styled(
                format!("{arrow} {}", sentiment.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled("○ WARMING...", Style::default().fg(C_NEUTRAL))),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
}
