//! # Fallback Handler
//!
//! Replies to anything that is not a recognized command. Always succeeds
//! and never touches an upstream API.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_fallback(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(crate::strings::messages::FALLBACK)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
