//! # News Client
//!
//! Fetches articles from a NewsAPI-compatible `everything` endpoint and
//! filters them by keyword.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::Error;
use crate::domain::config::NewsConfig;
use crate::domain::matcher;
use crate::domain::types::{Listing, ListingQuery, MAX_RESULTS};

const SERVICE: &str = "news";

/// News API response format
#[derive(Debug, Deserialize)]
struct NewsResponse {
    articles: Vec<Article>,
}

/// One article record. Only title and url are consumed.
#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    url: String,
}

pub struct NewsClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(config: &NewsConfig, timeout: Duration) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::new(SERVICE, format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Search for articles about `topic`, optionally narrowed by the query's
    /// location and keywords.
    ///
    /// The API is asked for the 5 most recent English articles; when the
    /// query carries keywords, only articles whose title matches at least
    /// one of them are kept. Result order is the API's order.
    pub async fn fetch(&self, topic: &str, query: &ListingQuery) -> Result<Vec<Listing>, Error> {
        let search_query = build_search_query(topic, &query.location);
        let page_size = MAX_RESULTS.to_string();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", search_query.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::new(SERVICE, format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(Error::new(SERVICE, format!("HTTP {status}: {body}")));
        }

        let news: NewsResponse = response
            .json()
            .await
            .map_err(|e| Error::new(SERVICE, format!("Failed to parse response: {e}")))?;

        tracing::debug!(
            "News query '{}' returned {} articles",
            search_query,
            news.articles.len()
        );

        Ok(filter_articles(news.articles, &query.keywords))
    }
}

/// The search string is the topic alone, or `"<topic> AND <location>"` when
/// a location was given.
fn build_search_query(topic: &str, location: &str) -> String {
    if location.is_empty() {
        topic.to_string()
    } else {
        format!("{topic} AND {location}")
    }
}

fn filter_articles(articles: Vec<Article>, keywords: &[String]) -> Vec<Listing> {
    articles
        .into_iter()
        .filter(|a| keywords.is_empty() || matcher::matches_any(&a.title, keywords))
        .map(|a| Listing::new(a.title, a.url))
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://news.example/{}", title.to_lowercase()),
        }
    }

    #[test]
    fn test_build_search_query_without_location() {
        assert_eq!(build_search_query("technology", ""), "technology");
    }

    #[test]
    fn test_build_search_query_with_location() {
        assert_eq!(
            build_search_query("internship", "berlin"),
            "internship AND berlin"
        );
    }

    #[test]
    fn test_no_keywords_keeps_everything() {
        let articles = vec![article("Alpha"), article("Beta")];
        let listings = filter_articles(articles, &[]);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Alpha");
        assert_eq!(listings[1].title, "Beta");
    }

    #[test]
    fn test_keywords_filter_titles() {
        let articles = vec![
            article("Rust 1.93 released"),
            article("Gardening tips"),
            article("Why Rust keeps winning"),
        ];
        let listings = filter_articles(articles, &["rust".to_string()]);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Rust 1.93 released");
        assert_eq!(listings[1].title, "Why Rust keeps winning");
    }

    #[test]
    fn test_response_shape_parses() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "A", "url": "https://a.example", "publishedAt": "2026-01-01T00:00:00Z"},
                {"title": "B", "url": "https://b.example"}
            ]
        }"#;
        let news: NewsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(news.articles.len(), 2);
        assert_eq!(news.articles[0].title, "A");
    }

    #[test]
    fn test_response_missing_articles_is_malformed() {
        let body = r#"{"status": "error", "code": "apiKeyInvalid"}"#;
        assert!(serde_json::from_str::<NewsResponse>(body).is_err());
    }
}
