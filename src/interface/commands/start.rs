//! # Start Command
//!
//! Handles `/start`: greets the user with the command overview. No fetch.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_start(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(crate::strings::help::MAIN)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
