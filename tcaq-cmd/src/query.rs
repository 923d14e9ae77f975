//! One-shot OpenAQ query with a printed monthly table and summaries.

use log::info;
use tcaq_openaq::api::{self, QueryParams};

/// Run the full query pipeline once and print the results.
pub async fn run_query(
    sensor_id: i64,
    date_from: &str,
    date_to: &str,
    threshold: f64,
    iso: &str,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let client = api::build_client()?;
    let params = QueryParams {
        api_key_override: api_key,
        iso_code: iso.to_string(),
        sensor_id,
        start_date: date_from.to_string(),
        end_date: date_to.to_string(),
        threshold,
    };

    info!("Running OpenAQ query for sensor {}", sensor_id);
    let outcome = api::run_query_pipeline(&client, &params).await?;

    println!("{:<10} {:>10} {:>8} {:>7}", "month", "value", "unit", "count");
    for row in &outcome.monthly {
        let value = row.value.map(|v| format!("{:.2}", v)).unwrap_or_default();
        let count = row.count.map(|c| c.to_string()).unwrap_or_default();
        println!("{:<10} {:>10} {:>8} {:>7}", row.month, value, row.unit, count);
    }
    if outcome.monthly.is_empty() {
        println!("{:<10} {:>10} {:>8} {:>7}", "No data", "", "", "");
    }

    println!();
    println!("{}", outcome.summary);
    println!("{}", outcome.locations);

    info!("Query complete. {} monthly rows", outcome.monthly.len());
    Ok(())
}
