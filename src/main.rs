mod config;
mod error;
mod homework;
mod platform;
mod poller;
mod practicum;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Credentials;
use crate::platform::telegram::TelegramNotifier;
use crate::practicum::PracticumClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine, the variables may come from the real environment
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,homework_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let credentials = Credentials::from_env();
    let poller = poller::start(
        &credentials,
        |c| PracticumClient::new(&c.practicum_token),
        |c| TelegramNotifier::new(&c.telegram_token, &c.telegram_chat_id),
    )?;
    let Some(poller) = poller else {
        return Ok(());
    };

    info!("Bot is starting...");
    poller.run().await;

    Ok(())
}
