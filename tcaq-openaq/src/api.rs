//! OpenAQ v3 API client and query pipeline (feature `api`).
//!
//! API documentation: https://docs.openaq.org/
//! Endpoints used:
//! - `GET /locations?iso={code}`
//! - `GET /sensors/{id}/days/monthly?date_from={}&date_to={}`
//!
//! Both carry the key in an `x-api-key` header.

use crate::error::OpenAqError;
use crate::inputs;
use crate::locations;
use crate::monthly::{self, MonthlyRecord};
use crate::payload;
use crate::summary;
use log::info;
use serde_json::Value;

/// Base URL for the OpenAQ v3 API.
pub const BASE_URL: &str = "https://api.openaq.org/v3";

/// Timeout applied to every fetch on native targets.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Build the shared HTTP client.
#[cfg(not(target_family = "wasm"))]
pub fn build_client() -> Result<reqwest::Client, OpenAqError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| OpenAqError::Unexpected(format!("Failed to build HTTP client: {}", e)))
}

/// Build the shared HTTP client. Browser fetch has no per-request timeout
/// knob, so the platform default applies.
#[cfg(target_family = "wasm")]
pub fn build_client() -> Result<reqwest::Client, OpenAqError> {
    Ok(reqwest::Client::new())
}

async fn get(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
) -> Result<(u16, String), OpenAqError> {
    let response = client
        .get(url)
        .header("x-api-key", api_key)
        .send()
        .await
        .map_err(|e| OpenAqError::Unexpected(format!("HTTP request failed: {}", e)))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| OpenAqError::Unexpected(format!("Failed to read response body: {}", e)))?;
    Ok((status, body))
}

/// Fetch monitoring locations for an ISO country code (e.g. "HK").
pub async fn fetch_locations(
    client: &reqwest::Client,
    iso_code: &str,
    api_key: &str,
) -> Result<Vec<Value>, OpenAqError> {
    let url = format!("{}/locations?iso={}", BASE_URL, iso_code);
    let (status, body) = get(client, &url, api_key).await?;
    let payload = payload::extract_payload(status, &body)?;
    Ok(payload::results_of(&payload))
}

/// Fetch the raw monthly-averages response for one sensor.
///
/// Returns the status and body without the 200 check so the batch dump can
/// apply its own per-entry error policy.
pub async fn fetch_monthly_response(
    client: &reqwest::Client,
    sensor_id: i64,
    date_from: &str,
    date_to: &str,
    api_key: &str,
) -> Result<(u16, String), OpenAqError> {
    let url = format!(
        "{}/sensors/{}/days/monthly?date_from={}&date_to={}",
        BASE_URL, sensor_id, date_from, date_to
    );
    get(client, &url, api_key).await
}

/// Fetch and normalize monthly PM2.5 averages for one sensor.
pub async fn fetch_monthly_averages(
    client: &reqwest::Client,
    sensor_id: i64,
    date_from: &str,
    date_to: &str,
    api_key: &str,
) -> Result<Vec<MonthlyRecord>, OpenAqError> {
    let (status, body) =
        fetch_monthly_response(client, sensor_id, date_from, date_to, api_key).await?;
    let payload = payload::extract_payload(status, &body)?;
    let results = payload::results_of(&payload);
    Ok(monthly::normalize_monthly_results(&results))
}

/// Inputs for one full query run.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub api_key_override: Option<String>,
    pub iso_code: String,
    pub sensor_id: i64,
    /// Start date, "YYYY-MM-DD"
    pub start_date: String,
    /// End date, "YYYY-MM-DD"
    pub end_date: String,
    /// PM2.5 health threshold in µg/m³
    pub threshold: f64,
}

/// Everything a completed query publishes.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub monthly: Vec<MonthlyRecord>,
    pub summary: String,
    pub locations: String,
}

/// Run the full pipeline: resolve inputs, fetch locations and monthly
/// averages, normalize, and build both summaries.
///
/// Any stage failure propagates; no partial outcome escapes.
pub async fn run_query_pipeline(
    client: &reqwest::Client,
    params: &QueryParams,
) -> Result<QueryOutcome, OpenAqError> {
    let api_key = inputs::resolve_api_key(params.api_key_override.as_deref())?;
    let date_from = inputs::format_date_start(Some(&params.start_date))?;
    let date_to = inputs::format_date_end(Some(&params.end_date))?;

    info!(
        "Querying sensor {} from {} to {} (iso {})",
        params.sensor_id, date_from, date_to, params.iso_code
    );

    let location_records = fetch_locations(client, &params.iso_code, &api_key).await?;
    let monthly_table = fetch_monthly_averages(
        client,
        params.sensor_id,
        &date_from,
        &date_to,
        &api_key,
    )
    .await?;

    info!(
        "{} locations, {} monthly rows",
        location_records.len(),
        monthly_table.len()
    );

    let summary = summary::build_summary(&monthly_table, params.threshold);
    let locations = locations::build_locations_summary(&location_records, &params.iso_code);

    Ok(QueryOutcome {
        monthly: monthly_table,
        summary,
        locations,
    })
}
