//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider)
//! and hosts the HTTP clients for the upstream listing APIs.

pub mod listings;
pub mod matrix;
