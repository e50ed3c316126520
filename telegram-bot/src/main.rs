//! linecount-bot: answers /start and /ping, replies to uploaded documents with their line count,
//! and can upload a file from the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use telegram_bot::{init_tracing, load_config, run_polling, BotConfig, Cli, Commands, PollOptions};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run(config).await
        }
        Commands::SendFile {
            token,
            chat_id,
            path,
            caption,
        } => {
            let config = load_config(token)?;
            init_tracing(&config.log_file)?;
            let bot = config.build_bot()?;
            let sent = bot.send_file(chat_id, &path, &caption).await?;
            info!(chat_id, message_id = sent.message_id, "Document uploaded");
            Ok(())
        }
    }
}

async fn run(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    let bot = Arc::new(config.build_bot()?);
    bot.add_command("/start", |_chat_id: i64| {
        "Send me a text file and I will count its lines.".to_string()
    })
    .await;
    bot.add_command("/ping", |_chat_id: i64| "pong".to_string()).await;

    info!(api_url = %bot.api_url(), "Bot started successfully");

    let options = PollOptions {
        poll_interval: config.poll_interval(),
        count_documents: true,
        ..PollOptions::default()
    };
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Ctrl-C received, stopping");
    };
    let offset = run_polling(bot, options, shutdown).await;
    info!(offset, "Bot stopped");
    Ok(())
}
