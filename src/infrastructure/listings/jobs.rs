//! # Jobs Client
//!
//! Fetches the full remote-jobs listing from a Remotive-compatible endpoint
//! and filters it locally. The API takes no query parameters in this
//! integration, so location, work mode, and keyword filtering all happen
//! here.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::Error;
use crate::domain::config::JobsConfig;
use crate::domain::matcher;
use crate::domain::types::{Listing, ListingQuery, MAX_RESULTS};

const SERVICE: &str = "jobs";

/// Work mode the router pins for `/jobs`.
pub const DEFAULT_MODE: &str = "remote";

/// Jobs API response format
#[derive(Debug, Deserialize)]
struct JobsResponse {
    jobs: Vec<Job>,
}

/// One job record, in the fields this integration consumes.
#[derive(Debug, Deserialize)]
struct Job {
    title: String,
    url: String,
    candidate_required_location: String,
    job_type: String,
}

pub struct JobsClient {
    http: Client,
    endpoint: String,
}

impl JobsClient {
    pub fn new(config: &JobsConfig, timeout: Duration) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::new(SERVICE, format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Retrieve the current listing and keep the first `MAX_RESULTS` jobs
    /// matching the query, in API order.
    pub async fn fetch(&self, query: &ListingQuery, mode: &str) -> Result<Vec<Listing>, Error> {
        let response = self
            .http
            .get(&self.endpoint)
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

        let listing: JobsResponse = response
            .json()
            .await
            .map_err(|e| Error::new(SERVICE, format!("Failed to parse response: {e}")))?;

        tracing::debug!("Jobs listing returned {} jobs", listing.jobs.len());

        Ok(filter_jobs(listing.jobs, query, mode))
    }
}

/// A job is kept only if the location and mode are case-insensitive
/// substrings of its location/type fields and, when keywords were given, its
/// title matches at least one of them.
///
/// Accumulation stops at `MAX_RESULTS`: the result is the first five matches
/// in API order, not a truncation of all matches.
fn filter_jobs(jobs: Vec<Job>, query: &ListingQuery, mode: &str) -> Vec<Listing> {
    let location = query.location.to_lowercase();
    let mode = mode.to_lowercase();

    let mut filtered = Vec::new();
    for job in jobs {
        if job
            .candidate_required_location
            .to_lowercase()
            .contains(&location)
            && job.job_type.to_lowercase().contains(&mode)
            && (query.keywords.is_empty() || matcher::matches_any(&job.title, &query.keywords))
        {
            filtered.push(Listing::new(job.title, job.url));
        }
        if filtered.len() >= MAX_RESULTS {
            break;
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str, job_type: &str) -> Job {
        Job {
            title: title.to_string(),
            url: format!("https://jobs.example/{}", title.to_lowercase().replace(' ', "-")),
            candidate_required_location: location.to_string(),
            job_type: job_type.to_string(),
        }
    }

    fn query(location: &str, keywords: &[&str]) -> ListingQuery {
        ListingQuery {
            location: location.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_all_three_predicates_must_hold() {
        let jobs = vec![
            job("Python Developer", "Remote, Worldwide", "full_time_remote"),
            job("Python Developer", "USA only", "full_time_remote"),
            job("Python Developer", "Remote, Worldwide", "on_site"),
            job("Marketing Lead", "Remote, Worldwide", "full_time_remote"),
        ];
        let listings = filter_jobs(jobs, &query("remote", &["python"]), DEFAULT_MODE);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Python Developer");
        assert_eq!(listings[0].link, "https://jobs.example/python-developer");
    }

    #[test]
    fn test_matches_keep_api_order() {
        // 10 jobs, 3 of which satisfy location, mode, and keyword.
        let mut jobs = Vec::new();
        for i in 0..10 {
            if i % 3 == 0 && i < 9 {
                jobs.push(job(&format!("Python Engineer {i}"), "Remote", "remote"));
            } else {
                jobs.push(job(&format!("Chef {i}"), "On-site", "full_time"));
            }
        }
        let listings = filter_jobs(jobs, &query("remote", &["python"]), DEFAULT_MODE);
        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Python Engineer 0", "Python Engineer 3", "Python Engineer 6"]
        );
    }

    #[test]
    fn test_early_exit_keeps_first_five() {
        let jobs = (0..20)
            .map(|i| job(&format!("Rust Engineer {i}"), "Remote", "remote"))
            .collect();
        let listings = filter_jobs(jobs, &query("", &[]), DEFAULT_MODE);
        assert_eq!(listings.len(), MAX_RESULTS);
        assert_eq!(listings[0].title, "Rust Engineer 0");
        assert_eq!(listings[4].title, "Rust Engineer 4");
    }

    #[test]
    fn test_empty_location_matches_everything() {
        let jobs = vec![
            job("A", "Remote, Europe", "remote"),
            job("B", "USA only", "contract_remote"),
        ];
        let listings = filter_jobs(jobs, &query("", &[]), DEFAULT_MODE);
        assert_eq!(listings.len(), 2);
    }

    #[test]
    fn test_location_and_mode_are_case_insensitive() {
        let jobs = vec![job("A", "Remote, EUROPE", "Full_Time_Remote")];
        let listings = filter_jobs(jobs, &query("europe", &[]), "REMOTE");
        assert_eq!(listings.len(), 1);
    }

    #[test]
    fn test_response_shape_parses() {
        let body = r#"{
            "job-count": 1,
            "jobs": [{
                "id": 1,
                "title": "Backend Developer",
                "url": "https://remotive.io/jobs/1",
                "candidate_required_location": "Worldwide",
                "job_type": "full_time",
                "company_name": "Acme"
            }]
        }"#;
        let listing: JobsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.jobs.len(), 1);
        assert_eq!(listing.jobs[0].job_type, "full_time");
    }

    #[test]
    fn test_response_missing_jobs_is_malformed() {
        assert!(serde_json::from_str::<JobsResponse>(r#"{"error": "down"}"#).is_err());
    }
}
