use tracing::error;

use crate::error::BotError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// The three secrets the bot needs. Nothing else is configurable.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read credentials from the process environment. Unset variables become
    /// empty strings and are reported by [`Credentials::check`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).unwrap_or_default();
        Self {
            practicum_token: get(PRACTICUM_TOKEN),
            telegram_token: get(TELEGRAM_TOKEN),
            telegram_chat_id: get(TELEGRAM_CHAT_ID),
        }
    }

    fn named(&self) -> [(&'static str, &str); 3] {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
    }

    /// Names of empty or unset credentials, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.named()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn check(&self) -> Result<(), BotError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BotError::MissingCredentials(missing))
        }
    }
}

/// Startup gate: logs which credentials are absent and tells the caller
/// whether polling may begin.
pub fn check_tokens(credentials: &Credentials) -> bool {
    match credentials.check() {
        Ok(()) => true,
        Err(e) => {
            error!(severity = "critical", "{} Shutting down.", e);
            false
        }
    }
}
