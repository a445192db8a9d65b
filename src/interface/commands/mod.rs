//! # Command Handlers
//!
//! Contains specific handler functions for each supported command
//! (`/start`, `/jobs`, `/internships`, `/technews`) plus the fallback for
//! everything else. These handlers are invoked by the Router.

pub mod jobs;
pub mod misc;
pub mod news;
pub mod start;
