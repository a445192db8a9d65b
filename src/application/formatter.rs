//! # Listing Formatter
//!
//! Renders a list of listings into a single markdown reply. Delivery of the
//! produced text belongs to the caller.

use crate::domain::types::Listing;
use crate::strings::messages;

pub struct ListingFormatter;

impl ListingFormatter {
    /// One message per reply: a bold header with the label, then one bullet
    /// per listing with the title as link text. Input order is preserved.
    /// An empty list renders the "no results" notice instead.
    pub fn format(label: &str, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return messages::no_results(label);
        }

        let mut content = format!("**📢 {label}**\n\n");
        for listing in listings {
            content.push_str(&format!("• [{}]({})\n", listing.title, listing.link));
        }
        content
    }
}
