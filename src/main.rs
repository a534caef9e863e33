// Prospect board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load both JSON data files (a failed load becomes an in-view error
//    banner, not a startup failure)
// 4. Build the ViewState and run the TUI until the user quits

use prospect_board::config;
use prospect_board::data;
use prospect_board::tui;

use anyhow::Context;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("prospect board starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "config loaded: prospects={}, predictions={}",
        config.prospects_path.display(),
        config.predictions_path.display()
    );

    // 3. Load data. Either file may be missing or malformed; the affected
    //    view shows an error banner over an empty table and the other view
    //    still works.
    let prospects = data::load_records(&config.prospects_path);
    if let Err(ref e) = prospects {
        warn!("prospects data unavailable: {e}");
    }
    let predictions = data::load_records(&config.predictions_path);
    if let Err(ref e) = predictions {
        warn!("predictions data unavailable: {e}");
    }

    // 4. Run the TUI (blocking until the user quits)
    let view_state = tui::ViewState::new(
        &config,
        tui::DataSet::from_result(prospects),
        tui::DataSet::from_result(predictions),
    );
    tui::run(view_state).await?;

    info!("prospect board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("qbboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prospect_board=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
