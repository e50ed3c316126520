//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "linecount-bot")]
#[command(about = "Telegram bot that answers commands and counts lines in uploaded files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll for updates and answer commands (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Upload a local file to a chat as a document.
    SendFile {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        chat_id: i64,
        #[arg(short, long)]
        path: PathBuf,
        #[arg(short, long, default_value = "")]
        caption: String,
    },
}

/// Load and validate BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    let config = BotConfig::load(token)?;
    config.validate()?;
    Ok(config)
}
