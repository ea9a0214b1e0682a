use std::sync::Arc;

use log::info;
use tokio::sync::watch;

use codecraft_infrastructure::config;
use codecraft_infrastructure::logging;
use codecraft_infrastructure::persistence::repositories::{
    SqliteActivityRepository, SqliteSessionRepository,
};
use codecraft_infrastructure::persistence::Database;
use codecraft_lib::application::queries::ContributionQueries;
use codecraft_lib::application::services::{CalendarRefreshService, DEFAULT_VIEWPORT_WIDTH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logger(&config::log_dir())?;

    let db = Database::open(&config::db_path()).await?;
    db.run_migrations().await?;
    let pool = Arc::new(db.pool().clone());

    let identity = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let activities = Arc::new(SqliteActivityRepository::new(pool));
    let queries = Arc::new(ContributionQueries::new(identity, activities));

    let is_pro = std::env::var("CODECRAFT_PRO")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    // The viewport signal normally comes from a UI shell; until one
    // reports, the channel is seeded with a full-year width.
    let (width_tx, width_rx) = watch::channel(DEFAULT_VIEWPORT_WIDTH);
    let (service, mut calendar_rx) = CalendarRefreshService::new(queries, width_rx, is_pro);
    tokio::spawn(service.run());

    if calendar_rx.changed().await.is_ok() {
        if let Some(calendar) = calendar_rx.borrow().as_ref() {
            info!(
                "[main] calendar ready max_days={} weeks={} active_days={}",
                calendar.max_days,
                calendar.weeks.len(),
                calendar.active_days
            );
            println!("{}", serde_json::to_string_pretty(calendar)?);
        }
    }

    tokio::signal::ctrl_c().await?;
    info!("[main] shutting down");
    drop(width_tx);

    Ok(())
}
