//! Cardioscope: Heart disease risk prediction client
//!
//! Main entry point for the terminal application.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cardioscope::adapters::{DesktopNotifier, HttpPredictor, NoopNotifier};
use cardioscope::ports::{Notifier, Predictor};
use cardioscope::tui::App;

fn main() -> Result<()> {
    // Initialize logging.
    //
    // IMPORTANT: writing logs to the terminal would corrupt the TUI
    // (alternate screen). Default behavior:
    // - interactive TTY: log to a file
    // - non-interactive: log to stdout
    let log_mode =
        std::env::var("CARDIOSCOPE_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let interactive = std::io::stdout().is_terminal();
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        // auto
        _ => interactive,
    };

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("CARDIOSCOPE_LOG_FILE")
            .unwrap_or_else(|_| "cardioscope.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            // Best-effort: don't fail startup just because the directory is missing.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting cardioscope...");

    let predictor: Arc<dyn Predictor> = Arc::new(HttpPredictor::from_env()?);

    // Desktop notifications can be opted out of for headless runs.
    let notifications_off = std::env::var("CARDIOSCOPE_NOTIFY")
        .map(|v| v.eq_ignore_ascii_case("off"))
        .unwrap_or(false);
    let notifier: Box<dyn Notifier> = if notifications_off {
        Box::new(NoopNotifier)
    } else {
        Box::new(DesktopNotifier::new())
    };

    let mut app = App::new(predictor, notifier);
    app.run()?;

    tracing::info!("Cardioscope shutdown complete.");
    Ok(())
}
