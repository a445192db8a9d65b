//! # Domain Types
//!
//! Plain data carried through the fetch/filter/format pipeline.

/// Hard cap on results per reply. Fetchers never return more than this.
pub const MAX_RESULTS: usize = 5;

/// One job or article result: a title and the URL it points at.
///
/// Listings have no identity beyond their fields; duplicates coming back
/// from an upstream API pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub link: String,
}

impl Listing {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Resolved parameters of a single lookup request.
///
/// Built from the raw argument string of a command and consumed once by a
/// fetcher. Keyword filtering is any-of: a listing passes if at least one
/// keyword matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub location: String,
    pub keywords: Vec<String>,
}

impl ListingQuery {
    /// Positional parsing for `/jobs` and `/internships`: the first token is
    /// always the location (even when the user meant a keyword), everything
    /// after it is a keyword. Missing tokens default to empty.
    pub fn from_args(args: &str) -> Self {
        let mut tokens = args.split_whitespace();
        let location = tokens.next().unwrap_or_default().to_string();
        let keywords = tokens.map(str::to_string).collect();
        Self { location, keywords }
    }

    /// Parsing for `/technews`: no location, every token is a keyword.
    pub fn keywords_only(args: &str) -> Self {
        Self {
            location: String::new(),
            keywords: args.split_whitespace().map(str::to_string).collect(),
        }
    }
}
