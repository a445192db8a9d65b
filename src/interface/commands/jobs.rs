//! # Jobs Command
//!
//! Handles `/jobs <location> <keyword>*`: queries the remote-jobs listing
//! and replies with the first matches.

use crate::application::formatter::ListingFormatter;
use crate::domain::traits::ChatProvider;
use crate::domain::types::ListingQuery;
use crate::infrastructure::listings::jobs::DEFAULT_MODE;
use crate::infrastructure::listings::JobsClient;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_jobs(jobs: &JobsClient, chat: &impl ChatProvider, args: &str) -> Result<()> {
    let query = ListingQuery::from_args(args);

    chat.typing(true).await.map_err(|e| anyhow::anyhow!(e))?;
    let outcome = jobs.fetch(&query, DEFAULT_MODE).await;
    chat.typing(false).await.map_err(|e| anyhow::anyhow!(e))?;

    match outcome {
        Ok(listings) => {
            tracing::info!("Sending {} {}", listings.len(), messages::REMOTE_JOBS);
            chat.send_message(&ListingFormatter::format(messages::REMOTE_JOBS, &listings))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(e) => {
            tracing::warn!("Jobs fetch failed: {}", e);
            chat.send_notification(&messages::service_unavailable(messages::REMOTE_JOBS))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}
