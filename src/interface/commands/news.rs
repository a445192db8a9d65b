//! # News Commands
//!
//! Handles the two news-backed commands: `/internships <location> <keyword>*`
//! and `/technews <keyword>*`. Both go through the same fetch/format path
//! and differ only in topic and argument parsing.

use crate::application::formatter::ListingFormatter;
use crate::domain::traits::ChatProvider;
use crate::domain::types::ListingQuery;
use crate::infrastructure::listings::NewsClient;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_internships(
    news: &NewsClient,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let query = ListingQuery::from_args(args);
    fetch_and_reply(news, chat, "internship", &query, messages::INTERNSHIP_NEWS).await
}

pub async fn handle_technews(news: &NewsClient, chat: &impl ChatProvider, args: &str) -> Result<()> {
    let query = ListingQuery::keywords_only(args);
    fetch_and_reply(news, chat, "technology", &query, messages::TECH_NEWS).await
}

async fn fetch_and_reply(
    news: &NewsClient,
    chat: &impl ChatProvider,
    topic: &str,
    query: &ListingQuery,
    label: &str,
) -> Result<()> {
    chat.typing(true).await.map_err(|e| anyhow::anyhow!(e))?;
    let outcome = news.fetch(topic, query).await;
    chat.typing(false).await.map_err(|e| anyhow::anyhow!(e))?;

    match outcome {
        Ok(listings) => {
            tracing::info!("Sending {} {}", listings.len(), label);
            chat.send_message(&ListingFormatter::format(label, &listings))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(e) => {
            tracing::warn!("News fetch failed: {}", e);
            chat.send_notification(&messages::service_unavailable(label))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}
