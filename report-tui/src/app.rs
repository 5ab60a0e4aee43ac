/// Dashboard application state
///
/// Owns the [`Screen`] exclusively; refresh outcomes and terminal events are
/// fed in from the main loop, so no locking is needed.
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::KeyCode;
use report_data::{Bucket, view::DashboardView};
use tracing::{info, warn};

use crate::{
    config::DashboardConfig,
    refresh::{RefreshOutcome, RefreshState, Refresher, SnapshotSource},
    screen::Screen,
    widgets::FrameContext,
};

pub struct App<Source> {
    pub screen: Screen,
    refresher: Refresher<Source>,
    refresh_interval: Duration,
    last_trigger: Option<Instant>,
    focus: Option<Bucket>,
    animation_start: Instant,
    should_quit: bool,
}

impl<Source> App<Source>
where
    Source: SnapshotSource,
{
    pub fn new(config: &DashboardConfig, source: Source) -> Self {
        let screen = Screen::new(&config.regions, config.ticker_speed);
        let focus = screen.mounted_buckets().first().copied();
        Self {
            screen,
            refresher: Refresher::new(source),
            refresh_interval: config.refresh_interval,
            last_trigger: None,
            focus,
            animation_start: Instant::now(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Option<Bucket> {
        self.focus
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresher.state()
    }

    /// Start a refresh cycle now.
    pub fn refresh_now(&mut self, now: Instant) {
        self.last_trigger = Some(now);
        self.refresher.trigger();
    }

    /// Timer and outcome housekeeping, called once per frame.
    pub fn on_tick(&mut self, now: Instant) {
        let due = self
            .last_trigger
            .is_none_or(|last| now.duration_since(last) >= self.refresh_interval);
        if due {
            self.refresh_now(now);
        }

        if let Some(outcome) = self.refresher.try_recv() {
            self.handle_outcome(outcome);
        }
    }

    /// Apply a successful cycle; log and keep the current content otherwise.
    pub fn handle_outcome(&mut self, outcome: RefreshOutcome) {
        match outcome.result {
            Ok(snapshot) => {
                let view = DashboardView::build(&snapshot, Utc::now());
                self.screen.apply(&view);
                info!(
                    generation = outcome.generation,
                    generated_at = %snapshot.headlines.generated_at,
                    prices = snapshot.prices.prices.len(),
                    "refresh cycle applied"
                );
            }
            Err(error) => {
                warn!(
                    generation = outcome.generation,
                    network = error.is_network(),
                    %error,
                    "refresh cycle failed, keeping previous content"
                );
            }
        }
    }

    /// Ticker-only recomputation for a new container width.
    pub fn on_resize(&mut self, ticker_width: usize) {
        if self.screen.fit_ticker(ticker_width) {
            info!(ticker_width, "ticker resized");
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.refresh_now(Instant::now()),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            _ => {}
        }
    }

    fn cycle_focus(&mut self) {
        let buckets = self.screen.mounted_buckets();
        self.focus = match self.focus.and_then(|focus| buckets.iter().position(|b| *b == focus)) {
            Some(index) => buckets.get((index + 1) % buckets.len()).copied(),
            None => buckets.first().copied(),
        };
    }

    fn move_selection(&mut self, delta: isize) {
        if let Some(bucket) = self.focus {
            self.screen.move_selection(bucket, delta);
        }
    }

    pub fn frame_context(&self, now: Instant) -> FrameContext {
        FrameContext {
            focus: self.focus,
            ticker_elapsed: now.duration_since(self.animation_start),
            refresh: self.refresh_state(),
        }
    }
}
