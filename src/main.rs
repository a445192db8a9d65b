//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix adapter, listing service clients
//! - Application: Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::SyncRoomMessageEvent,
    },
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::listings::{JobsClient, NewsClient};
use crate::infrastructure::matrix::MatrixService;

#[derive(Parser)]
#[command(name = "herald", about = "Relays job and news listings to chat rooms")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    // Ensure data directory exists
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting Herald...");

    // 3. Initialize Service Clients
    let timeout = Duration::from_secs(config.system.request_timeout_secs);
    let news = Arc::new(NewsClient::new(&config.services.news, timeout)?);
    let jobs = Arc::new(JobsClient::new(&config.services.jobs, timeout)?);

    let router = Arc::new(CommandRouter::new(config.clone(), news, jobs));

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("Logged in as {}", config.services.matrix.username);

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();
    let loop_router = router.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = loop_router.clone();

        async move {
            if let Some(original_msg) = ev.as_original() {
                // Ignore events older than start_time
                let ts = ev.origin_server_ts();
                let event_time =
                    std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
                if event_time < start_time {
                    return;
                }

                if let matrix_sdk::ruma::events::room::message::MessageType::Text(text_content) =
                    &original_msg.content.msgtype
                {
                    let body = &text_content.body;
                    tracing::info!("Received message from {}: \n{}", original_msg.sender, body);
                    if original_msg.sender == room.own_user_id() {
                        return;
                    }

                    let chat = MatrixService::new(room);

                    // Dispatch
                    if let Err(e) = router
                        .route(&chat, body, original_msg.sender.as_str())
                        .await
                    {
                        tracing::error!("Failed to route message: {}", e);
                    }
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            let _ = room.join().await;
        }
    });

    // 6. Sync Loop
    tracing::info!("Herald is running...");
    client.sync(SyncSettings::default()).await?;

    Ok(())
}
