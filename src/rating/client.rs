//! Frequency-rating service client
//!
//! One blocking POST per word to the corpus search endpoint; the rating is
//! the number of matching documents (`foundIDs`).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};

/// Source of occurrence counts for Cyrillic words
pub trait RatingService {
    /// Occurrence count of `cyrillic`. Any failure is an error, never 0.
    fn occurrences(&mut self, cyrillic: &str) -> Result<u64>;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    params: SearchParams<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams<'a> {
    text_standard: TextStandard<'a>,
    words: [SearchWord<'a>; 1],
    words_order: &'static str,
}

#[derive(Serialize)]
struct TextStandard<'a> {
    subcorpuses: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchWord<'a> {
    all_forms: bool,
    grammar: Option<String>,
    word: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "foundIDs")]
    found_ids: Option<Vec<serde_json::Value>>,
}

fn search_body<'a>(subcorpora: &'a [String], cyrillic: &'a str) -> SearchRequest<'a> {
    SearchRequest {
        params: SearchParams {
            text_standard: TextStandard {
                subcorpuses: subcorpora,
            },
            words: [SearchWord {
                all_forms: false,
                grammar: None,
                word: cyrillic,
            }],
            words_order: "PRESET",
        },
    }
}

/// Read the count out of a response body
fn parse_count(body: &str) -> Result<u64> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| Error::RatingService(format!("undecodable response: {}", e)))?;
    let ids = response
        .found_ids
        .ok_or_else(|| Error::RatingService(format!("no foundIDs in response: {}", body)))?;
    Ok(ids.len() as u64)
}

/// HTTP client for the corpus search service
pub struct KorpusClient {
    client: Client,
    endpoint: String,
    subcorpora: Vec<String>,
}

impl KorpusClient {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.rating_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.rating_endpoint.clone(),
            subcorpora: config.subcorpora.clone(),
        })
    }
}

impl RatingService for KorpusClient {
    fn occurrences(&mut self, cyrillic: &str) -> Result<u64> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&search_body(&self.subcorpora, cyrillic))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::RatingService(format!(
                "{} for {:?}: {}",
                status, cyrillic, body
            )));
        }

        parse_count(&body)
    }
}
