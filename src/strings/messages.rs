//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.

/// Reply-header labels, one per command.
pub const REMOTE_JOBS: &str = "Remote Jobs";
pub const INTERNSHIP_NEWS: &str = "Internship News";
pub const TECH_NEWS: &str = "Tech News";

pub const FALLBACK: &str = concat!(
    "💬 I only understand commands like /jobs, /technews, or /internships.\n",
    "Try `/jobs remote python` for example."
);

/// The query ran fine but nothing matched.
pub fn no_results(label: &str) -> String {
    format!("No {} found.", label.to_lowercase())
}

/// The upstream service failed; distinct from an empty result.
pub fn service_unavailable(label: &str) -> String {
    format!(
        "⚠️ Couldn't fetch {} right now — the service did not respond. Please try again later.",
        label.to_lowercase()
    )
}
