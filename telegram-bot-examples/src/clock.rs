use std::sync::Arc;

use chrono::Local;
use telegram_bot::{init_tracing, run_polling, BotConfig, PollOptions};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_file = "logs/clock-bot.log";
    init_tracing(log_file)?;

    let config = BotConfig::load(None)?;
    config.validate()?;

    let bot = Arc::new(config.build_bot()?);
    bot.add_command("/clock", |chat_id: i64| {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S");
        info!(chat_id, time = %now, "Sending time");
        format!("Current time: {}", now)
    })
    .await;

    info!(start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"), log_file = %log_file, "Clock Bot started");

    let options = PollOptions {
        poll_interval: config.poll_interval(),
        ..PollOptions::default()
    };
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let offset = run_polling(bot, options, shutdown).await;
    info!(offset, "Clock Bot stopped");
    Ok(())
}
