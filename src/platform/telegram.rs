use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::error::BotError;
use crate::platform::Notifier;

/// Numeric ids address users and groups; anything else is treated as a
/// public channel username such as `@my_channel`.
fn parse_recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}

/// Sends notifications to one fixed Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            bot: Bot::new(token),
            chat: parse_recipient(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, text: &str) -> Result<(), BotError> {
        self.bot
            .send_message(self.chat.clone(), text)
            .await
            .map(|_| ())
            .map_err(|e| BotError::DeliveryFailed(e.to_string()))
    }
}
