use reqwest::StatusCode;

/// Coarse error category, used by the poll loop and tests to match on
/// what went wrong without caring about the exact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigMissing,
    Connectivity,
    ShapeMismatch,
    MissingKey,
    UnknownStatus,
    DeliveryFailed,
}

/// Why the homework endpoint was considered unavailable.
#[derive(thiserror::Error, Debug)]
pub enum ConnectivityCause {
    #[error("unexpected status code {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Ошибка json-конвертации - {0}.")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Errors raised by the bot's components. The display text is what ends up
/// in the chat, so it stays in the bot's user-facing language.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Отсутствуют обязательные переменные окружения - {0:?}.")]
    MissingCredentials(Vec<&'static str>),
    #[error("Эндпойнт недоступен.")]
    EndpointUnavailable(#[source] ConnectivityCause),
    #[error("{0}")]
    TypeMismatch(&'static str),
    #[error("В API ответе отсутствует ключ '{0}'.")]
    MissingResponseKey(&'static str),
    #[error("Отсутствует ключ '{0}' в ответе API.")]
    MissingHomeworkKey(&'static str),
    #[error("Неожиданный статус '{0}' домашней работы.")]
    UnknownStatus(String),
    #[error("Сбой при отправке сообщения в Telegram - {0}.")]
    DeliveryFailed(String),
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::MissingCredentials(_) => ErrorKind::ConfigMissing,
            BotError::EndpointUnavailable(_) => ErrorKind::Connectivity,
            BotError::TypeMismatch(_) => ErrorKind::ShapeMismatch,
            BotError::MissingResponseKey(_) | BotError::MissingHomeworkKey(_) => {
                ErrorKind::MissingKey
            }
            BotError::UnknownStatus(_) => ErrorKind::UnknownStatus,
            BotError::DeliveryFailed(_) => ErrorKind::DeliveryFailed,
        }
    }
}

impl From<ConnectivityCause> for BotError {
    fn from(cause: ConnectivityCause) -> Self {
        BotError::EndpointUnavailable(cause)
    }
}
