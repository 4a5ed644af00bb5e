use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::document::DEFAULT_CHUNK_CHARS;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the translation HTTP server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Translate a single text to Vietnamese and print the result
    Translate {
        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Translation mode (formal, casual, technical, creative)
        #[arg(short, long, default_value = "formal")]
        mode: String,

        /// Use the legacy endpoint instead of the mode-aware one
        #[arg(long)]
        legacy: bool,
    },

    /// Translate a plain-text file chunk by chunk, writing the result as it goes
    TranslateFile {
        /// Text file to translate
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (overwritten)
        #[arg(short, long)]
        output: PathBuf,

        /// Translation mode (formal, casual, technical, creative)
        #[arg(short, long, default_value = "formal")]
        mode: String,

        /// Maximum characters per request; longer paragraphs are sent whole
        #[arg(long, default_value_t = DEFAULT_CHUNK_CHARS)]
        chunk_chars: usize,
    },

    /// List available translation modes
    Modes,

    /// Write the default configuration to a file
    InitConfig {
        /// Output file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
}
