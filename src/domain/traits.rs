//! # Domain Traits
//!
//! Abstract interface for the chat transport.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Slack, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked/editable)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
