use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};

use super::{parse_response, Reachability};
use crate::{config::ApiConfig, model::ReachQuery, ReachError};

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";

/// blocking client for the reachable_transit endpoint. every call to
/// [`ReachabilityClient::fetch`] sends exactly one request and never retries.
#[derive(Debug)]
pub struct ReachabilityClient {
    client: Client,
    api: ApiConfig,
    api_key: String,
}

/// a decoded response along with the raw body it came from
#[derive(Debug)]
pub struct FetchResult {
    pub reachability: Reachability,
    pub body: String,
}

impl ReachabilityClient {
    pub fn new(api: &ApiConfig, api_key: &str) -> Result<ReachabilityClient, ReachError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(concat!("reachable-transit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReachError::NetworkError(format!("failed building HTTP client: {e}")))?;
        Ok(ReachabilityClient {
            client,
            api: api.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// query parameters for a reachability search
    pub fn query_params(query: &ReachQuery) -> Vec<(&'static str, String)> {
        vec![
            ("start", query.origin().start_param()),
            ("term", query.time_limit().to_string()),
            ("transit_limit", query.max_transfers().to_string()),
            ("partition_count", query.partition_count().to_string()),
            ("walk_speed", query.walk_speed().to_string()),
            ("node_type", query.node_type().to_string()),
            ("datum", String::from("wgs84")),
            ("coord_unit", String::from("degree")),
        ]
    }

    pub fn fetch(&self, query: &ReachQuery) -> Result<Reachability, ReachError> {
        self.fetch_with_body(query).map(|r| r.reachability)
    }

    /// sends the request and decodes the body, keeping the raw text so that
    /// callers can persist it.
    pub fn fetch_with_body(&self, query: &ReachQuery) -> Result<FetchResult, ReachError> {
        let url = self.api.endpoint_url();
        let params = ReachabilityClient::query_params(query);
        log::debug!("GET {url} with params {params:?}");

        let response = self
            .client
            .get(&url)
            .header(HOST_HEADER, &self.api.host)
            .header(KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .map_err(|e| self.network_error(&url, e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.network_error(&url, e))?;
        log::debug!("response status {status}, {} bytes", body.len());

        if !status.is_success() {
            return Err(ReachError::ApiError {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        let reachability = parse_response(&body)?;
        Ok(FetchResult { reachability, body })
    }

    fn network_error(&self, url: &str, e: reqwest::Error) -> ReachError {
        if e.is_timeout() {
            ReachError::NetworkError(format!(
                "GET {url} timed out after {} seconds",
                self.api.timeout_secs
            ))
        } else {
            ReachError::NetworkError(format!("GET {url} failed: {e}"))
        }
    }
}

/// RapidAPI reports failures as `{"message": "..."}`; other bodies are used
/// verbatim, and an empty body falls back to the status reason.
fn api_error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
    match from_json {
        Some(msg) => msg,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}
