//! # Listing Services
//!
//! HTTP clients for the two upstream listing APIs (news search and remote
//! jobs). Each client owns its own `reqwest::Client` and returns
//! `Result<Vec<Listing>, Error>`: `Ok` with an empty vector means the query
//! genuinely matched nothing, `Err` means the upstream call failed.

pub mod jobs;
pub mod news;

pub use jobs::JobsClient;
pub use news::NewsClient;

/// Error from an upstream listing service.
#[derive(Debug)]
pub struct Error {
    pub service: String,
    pub message: String,
}

impl Error {
    pub fn new(service: &str, message: impl Into<String>) -> Self {
        Self {
            service: service.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.service, self.message)
    }
}

impl std::error::Error for Error {}
