/// Blair Report Dashboard
///
/// Polls the headline and price feeds every refresh interval and renders
/// headline buckets, a scrolling price ticker and the market movers.
use std::{error::Error, fs::File, io, sync::Mutex, time::Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use report_data::FeedClient;
use report_tui::{
    App, DashboardConfig,
    widgets::{DashboardLayout, render_dashboard},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = DashboardConfig::from_env();
    init_logging(&config)?;

    let client = FeedClient::new(config.feed.clone())?;
    info!(base_url = %config.feed.base_url, refresh = ?config.refresh_interval, "starting dashboard");

    // Setup panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, client);
    let result = run_app(&mut terminal, &mut app, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App<FeedClient>,
    config: &DashboardConfig,
) -> Result<(), Box<dyn Error>>
where
    B: ratatui::backend::Backend,
{
    loop {
        let now = Instant::now();
        app.on_tick(now);

        // Size the ticker against the real panel before drawing; this also
        // corrects the fallback width used before the first frame.
        let size = terminal.size()?;
        let layout = DashboardLayout::new(Rect::new(0, 0, size.width, size.height), &app.screen);
        app.on_resize(layout.ticker_width());

        let ctx = app.frame_context(now);
        terminal.draw(|f| render_dashboard(f, &app.screen, &ctx))?;

        // Let the refresh task make progress between frames
        tokio::task::yield_now().await;

        if event::poll(config.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Resize(width, height) => {
                    let layout = DashboardLayout::new(Rect::new(0, 0, width, height), &app.screen);
                    app.on_resize(layout.ticker_width());
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("dashboard exiting");
            return Ok(());
        }
    }
}

/// Initialize logging to the configured file; the terminal belongs to the UI
fn init_logging(config: &DashboardConfig) -> Result<(), Box<dyn Error>> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
