use std::time::Duration;

use anyhow::Result;
use tracing::{debug, error, info};

use crate::config::{check_tokens, Credentials};
use crate::error::BotError;
use crate::homework::{check_response, parse_status};
use crate::platform::{send_message, Notifier};
use crate::practicum::HomeworkSource;

/// Delay between two polls, applied after every cycle.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// How far back the very first poll looks.
pub const ONE_MONTH: i64 = 2_629_743;

/// Watermark for the first poll: one month before now.
pub fn initial_timestamp() -> i64 {
    chrono::Utc::now().timestamp() - ONE_MONTH
}

/// Startup sequence: the source and notifier are only built once every
/// credential is present. `None` means the bot must not start.
pub fn start<S, N, FS, FN>(
    credentials: &Credentials,
    make_source: FS,
    make_notifier: FN,
) -> Result<Option<Poller<S, N>>>
where
    S: HomeworkSource,
    N: Notifier,
    FS: FnOnce(&Credentials) -> Result<S>,
    FN: FnOnce(&Credentials) -> N,
{
    if !check_tokens(credentials) {
        return Ok(None);
    }
    let source = make_source(credentials)?;
    let notifier = make_notifier(credentials);
    Ok(Some(Poller::new(source, notifier, initial_timestamp())))
}

/// Fetch, validate, interpret and notify, forever.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    timestamp: i64,
    retry_period: Duration,
}

impl<S, N> Poller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, timestamp: i64) -> Self {
        Self {
            source,
            notifier,
            timestamp,
            retry_period: RETRY_PERIOD,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Run one poll cycle without sleeping. Any failure is reported to the
    /// chat and swallowed.
    pub async fn poll_once(&mut self) {
        if let Err(e) = self.check_updates().await {
            error!(kind = ?e.kind(), "Poll cycle failed: {}", e);
            let message = format!("Сбой в работе программы: {}", e);
            send_message(&self.notifier, &message).await;
        }
    }

    async fn check_updates(&mut self) -> Result<(), BotError> {
        let response = self.source.fetch(self.timestamp).await?;
        let checked = check_response(&response)?;

        let Some(homework) = checked.homeworks.first() else {
            debug!("No status changes since {}", self.timestamp);
            return Ok(());
        };

        let message = parse_status(homework)?;
        let watermark = checked.watermark()?;
        send_message(&self.notifier, &message).await;
        self.timestamp = watermark;
        Ok(())
    }

    /// Poll until the process is killed.
    pub async fn run(mut self) {
        info!(
            "Polling homework statuses every {}s starting from {}",
            self.retry_period.as_secs(),
            self.timestamp()
        );
        loop {
            self.poll_once().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }
}
