//! vntranslate - Vietnamese translation server
//!
//! Entry point: runs the HTTP server or performs one-off translations from the
//! command line.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};

use vntranslate::cli::{Args, Commands};
use vntranslate::config::Config;
use vntranslate::document;
use vntranslate::modes;
use vntranslate::server;
use vntranslate::translate::{TranslationDispatcher, TranslationRequest};

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env before logging so RUST_LOG may be set there
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let _log_guard = setup_logging(args.verbose)?;

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    let mut config = Config::load(args.config.as_deref())?;

    match args.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::run(config).await?;
        }
        Commands::Translate { text, mode, legacy } => {
            let dispatcher = TranslationDispatcher::from_config(&config)?;
            let request = TranslationRequest::new(text).with_mode(mode);

            let result = if legacy {
                dispatcher.translate_legacy(request).await?
            } else {
                dispatcher.translate(request).await?
            };
            println!("{}", result.translated_text);
        }
        Commands::TranslateFile { input, output, mode, chunk_chars } => {
            let dispatcher = TranslationDispatcher::from_config(&config)?;
            let summary = document::translate_file(&dispatcher, &input, &output, &mode, chunk_chars).await?;
            println!(
                "Translated {} of {} chunk(s) into {}",
                summary.translated,
                summary.chunks,
                output.display()
            );
            if summary.kept_original > 0 {
                println!("{} chunk(s) left untranslated, see the log for details", summary.kept_original);
            }
        }
        Commands::Modes => {
            println!("\nTranslation Modes:");
            println!("{:<12} {:<12} {}", "Id", "Name", "Description");
            println!("{}", "-".repeat(90));
            for mode in modes::list_all() {
                println!("{:<12} {:<12} {}", mode.id(), mode.name(), mode.description());
            }
        }
        Commands::InitConfig { output } => {
            Config::default().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Log to the console and to a daily file under `.vntranslate/log`.
///
/// File output stops once the returned guard is dropped.
fn setup_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = std::env::current_dir()?.join(".vntranslate").join("log");
    std::fs::create_dir_all(&log_dir)?;

    let (file_writer, guard) = non_blocking(rolling::daily(&log_dir, "vntranslate.log"));
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_target(false)
                .with_thread_ids(true)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging at {} to {}", level, log_dir.display());
    Ok(guard)
}
