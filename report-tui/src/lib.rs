/// Blair Report Terminal Dashboard - Shared Library
///
/// The `report-dashboard` binary is a thin terminal shell around this library:
/// - Region screen standing in for the page the feeds were designed for
/// - Refresh loop that supersedes in-flight cycles instead of racing them
/// - Ratatui widgets for the ticker, headline buckets and market movers
pub mod app;
pub mod config;
pub mod refresh;
pub mod screen;
pub mod widgets;

pub use app::App;
pub use config::DashboardConfig;
pub use refresh::{RefreshOutcome, RefreshState, Refresher, SnapshotSource};
pub use screen::{Region, RegionId, Screen};
