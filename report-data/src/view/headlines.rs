use chrono::{DateTime, Utc};

use crate::{model::HeadlineItem, time::fmt_time_ago};

/// One rendered headline entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineRow {
    pub title: String,
    /// Opened externally; never followed by the dashboard itself
    pub link: String,
    /// Relative age plus an optional ` • {source}` suffix
    pub meta: String,
}

/// Project headline items into rows, one per item, in input order.
pub fn render_list(items: &[HeadlineItem], now: DateTime<Utc>) -> Vec<HeadlineRow> {
    items
        .iter()
        .map(|item| HeadlineRow {
            title: item.title.clone(),
            link: item.link.clone(),
            meta: meta_label(item, now),
        })
        .collect()
}

fn meta_label(item: &HeadlineItem, now: DateTime<Utc>) -> String {
    let age = fmt_time_ago(&item.published_at, now);
    match item.source.as_deref().map(str::trim) {
        Some(source) if !source.is_empty() => format!("{age} • {source}"),
        _ => age,
    }
}
