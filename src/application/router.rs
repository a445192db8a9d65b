//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in
//! `interface/commands`). It parses the command string (e.g., `/jobs`) and
//! dispatches it with the necessary context. Dispatch is stateless: each
//! message is handled on its own, with no session or multi-turn state.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::infrastructure::listings::{JobsClient, NewsClient};
use crate::interface::commands;

pub struct CommandRouter {
    config: AppConfig,
    news: Arc<NewsClient>,
    jobs: Arc<JobsClient>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, news: Arc<NewsClient>, jobs: Arc<JobsClient>) -> Self {
        Self { config, news, jobs }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + Clone + Send + Sync + 'static,
    {
        // Room gating: an empty allowlist means every joined room.
        let allowed = &self.config.system.allowed_rooms;
        if !allowed.is_empty() && !allowed.contains(&chat.room_id()) {
            return Ok(());
        }

        let msg = message.trim();
        if msg.is_empty() {
            return Ok(());
        }

        let (cmd, args) = if let Some(idx) = msg.find(' ') {
            (&msg[..idx], msg[idx + 1..].trim())
        } else {
            (msg, "")
        };
        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            cmd,
            args,
            sender
        );

        match cmd {
            "/start" => {
                commands::start::handle_start(chat).await?;
            }
            "/jobs" => {
                commands::jobs::handle_jobs(&self.jobs, chat, args).await?;
            }
            "/internships" => {
                commands::news::handle_internships(&self.news, chat, args).await?;
            }
            "/technews" => {
                commands::news::handle_technews(&self.news, chat, args).await?;
            }
            _ => {
                commands::misc::handle_fallback(chat).await?;
            }
        }

        Ok(())
    }
}
