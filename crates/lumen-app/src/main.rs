use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use lumen_translator::{FallbackTranslator, Translator};
use lumen_types::Size;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod context;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod view;
pub mod viewer;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;
use self::view::{TerminalOverlay, TerminalPopupView};
use self::viewer::ScriptedViewer;

/// Translate text selected in a PDF viewer and dim the page
#[derive(Parser, Debug)]
#[command(name = "lumen", version)]
struct Args {
    /// JSON config file (defaults to ./lumen.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source language code
    #[arg(long)]
    from: Option<String>,

    /// Target language code
    #[arg(long)]
    to: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Print the effective config and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = profile::load_config(args.config.as_deref())?;
    if let Some(from) = args.from {
        config.translator.from_lang = from;
    }
    if let Some(to) = args.to {
        config.translator.to_lang = to;
    }

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let translator = FallbackTranslator::from_config(&config.translator)
        .context("Failed to build translation providers")?;
    tracing::info!(
        "Translating {} -> {} via {}",
        config.translator.from_lang,
        config.translator.to_lang,
        translator.metadata().name
    );

    let viewport = Size::new(config.viewer.viewport_width, config.viewer.viewport_height);
    let view =
        TerminalPopupView::new(std::io::stdout(), viewport, config.popup.loading_text.clone());
    let viewer = ScriptedViewer::new(config.viewer.clone());
    let overlay = TerminalOverlay::new(std::io::stdout());

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state).await;
    let mut tasks = controller
        .spawn_tasks(view, Box::new(viewer), Box::new(overlay), Arc::new(translator))
        .await;
    controller
        .spawn_script_reader(BufReader::new(std::io::stdin()))
        .await;

    tracing::info!("PDF reader with translation initialized");

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    let drain = async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::error!("Task failed during shutdown: {e:#}");
            }
        }
    };
    if tokio::time::timeout(Duration::from_secs(2), drain).await.is_err() {
        tracing::warn!("Tasks did not stop in time");
    }

    Ok(())
}
