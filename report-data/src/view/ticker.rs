//! Self-measuring infinite price ticker
//!
//! A *run* holds one label per price. The *track* repeats whole runs until it
//! spans at least twice the container, so scrolling by one container width
//! never exposes a gap before the loop restarts.

use std::time::Duration;

use crate::{format::fmt_price, model::PriceItem};

/// Container width assumed when the real one has not been measured yet
pub const FALLBACK_CONTAINER_WIDTH: usize = 800;

/// Default scroll speed in cells per second
pub const DEFAULT_SPEED: f64 = 100.0;

/// Lower bound of one animation cycle
pub const MIN_DURATION_SECS: u64 = 20;

/// Spacing appended after every label
pub const LABEL_GAP: &str = "   ";

/// `#{rank} {SYMBOL} ${price}`, omitting absent tokens.
pub fn ticker_label(item: &PriceItem) -> String {
    let mut tokens = Vec::with_capacity(3);
    if let Some(rank) = item.rank {
        tokens.push(format!("#{rank}"));
    }
    tokens.push(item.symbol.to_uppercase());
    if let Some(price) = item.price {
        tokens.push(format!("${}", fmt_price(price)));
    }
    tokens.join(" ")
}

/// One pass over every price label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRun {
    pub labels: Vec<String>,
    /// Labels joined with trailing gaps, exactly as drawn
    pub text: String,
}

impl TickerRun {
    /// Build a run from `prices`, or `None` when there is nothing to show.
    pub fn new(prices: &[PriceItem]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let labels: Vec<String> = prices.iter().map(ticker_label).collect();
        let text = labels.iter().map(|label| format!("{label}{LABEL_GAP}")).collect();
        Some(Self { labels, text })
    }
}

/// Run repeated to fill the container, plus the derived animation duration
#[derive(Debug, Clone, PartialEq)]
pub struct TickerTrack {
    pub run: TickerRun,
    /// Rendered width of a single run
    pub run_width: usize,
    /// Number of whole runs appended to the track
    pub clones: usize,
    /// Accumulated width of all clones
    pub total_width: usize,
    /// Width the track was sized against
    pub container_width: usize,
    /// Duration of one animation cycle
    pub duration: Duration,
}

/// Size a ticker track for `container_width`.
///
/// `container_width` of zero means "not measured yet" and falls back to
/// [`FALLBACK_CONTAINER_WIDTH`]. `measure` returns the rendered width of a
/// string. Returns `None` for an empty price list or a run that measures zero.
pub fn setup_ticker<M>(
    prices: &[PriceItem],
    container_width: usize,
    speed: f64,
    measure: M,
) -> Option<TickerTrack>
where
    M: Fn(&str) -> usize,
{
    let run = TickerRun::new(prices)?;
    let run_width = measure(&run.text);
    if run_width == 0 {
        return None;
    }

    let container_width = match container_width {
        0 => FALLBACK_CONTAINER_WIDTH,
        width => width,
    };
    let target = container_width.saturating_mul(2);

    let mut clones = 0;
    let mut total_width = 0;
    while total_width < target || clones == 0 {
        total_width += run_width;
        clones += 1;
    }

    Some(TickerTrack {
        run,
        run_width,
        clones,
        total_width,
        container_width,
        duration: scroll_duration(total_width, speed),
    })
}

/// `max(20, round(total_width / speed))` seconds. Non-positive or non-finite
/// speeds fall back to [`DEFAULT_SPEED`].
pub fn scroll_duration(total_width: usize, speed: f64) -> Duration {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        DEFAULT_SPEED
    };
    let secs = (total_width as f64 / speed).round() as u64;
    Duration::from_secs(secs.max(MIN_DURATION_SECS))
}

impl TickerTrack {
    /// Scroll offset into the cloned track after `elapsed` time of animation.
    ///
    /// The whole track of `clones` runs passes once per `duration`, so the strip
    /// moves at the configured speed. Wraps back to 0 at the end of each cycle.
    pub fn offset(&self, elapsed: Duration) -> usize {
        let track_len = self.run.text.chars().count() * self.clones;
        let cycle = self.duration.as_secs_f64();
        if track_len == 0 || cycle <= 0.0 {
            return 0;
        }

        let into_cycle = elapsed.as_secs_f64() % cycle;
        (into_cycle * track_len as f64 / cycle).floor() as usize % track_len
    }

    /// Visible slice of the track, `width` characters wide, after `elapsed`
    /// time of animation. The track is whole runs, so the slice continues into
    /// the next run and the strip never shows a gap.
    pub fn window(&self, elapsed: Duration, width: usize) -> String {
        let chars: Vec<char> = self.run.text.chars().collect();
        if chars.is_empty() || width == 0 {
            return String::new();
        }

        chars
            .iter()
            .cycle()
            .skip(self.offset(elapsed))
            .take(width)
            .collect()
    }

    /// Whether the track was sized against a different container width.
    pub fn needs_resize(&self, container_width: usize) -> bool {
        container_width != 0 && container_width != self.container_width
    }
}
