//! Batch dump of raw monthly results for the named Hong Kong PM2.5 sensors.
//!
//! Unlike the interactive query, a non-200 response for one sensor does not
//! abort the batch: that entry becomes `{"error": status_code}` and the rest
//! proceed. Transport failures still abort.

use log::info;
use serde_json::{json, Map, Value};
use tcaq_openaq::api;
use tcaq_openaq::error::OpenAqError;
use tcaq_openaq::inputs;
use tcaq_openaq::payload;

/// Hong Kong PM2.5 sensors for the batch dump, keyed by output entry name.
///
/// Station / sensor IDs: Tung Chung 7727/22471, Mong Kok 7728/22477,
/// Central & Western 7730/22481, Causeway Bay 7732/22492.
const BATCH_SENSORS: [(&str, i64); 4] = [
    ("TC_monthly_averages", 22471),
    ("MK_monthly_averages", 22477),
    ("CW_monthly_averages", 22481),
    ("CB_monthly_averages", 22492),
];

/// Fetch every batch sensor and write the combined JSON dump.
pub async fn run_batch(
    output: &str,
    date_from: &str,
    date_to: &str,
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let api_key = inputs::resolve_api_key(api_key)?;
    let date_from = inputs::format_date_start(Some(date_from))?;
    let date_to = inputs::format_date_end(Some(date_to))?;
    let client = api::build_client()?;

    let mut dump = Map::new();
    for (name, sensor_id) in BATCH_SENSORS {
        info!("Fetching monthly averages for {} (sensor {})", name, sensor_id);
        let (status, body) =
            api::fetch_monthly_response(&client, sensor_id, &date_from, &date_to, &api_key)
                .await?;
        if status != 200 {
            info!("Bad response for sensor {}: {}", sensor_id, status);
        }
        dump.insert(name.to_string(), batch_entry(status, &body)?);
    }

    let rendered = serde_json::to_string_pretty(&Value::Object(dump))?;
    std::fs::write(output, rendered)?;

    info!("Saved {} (overwrite)", output);
    Ok(())
}

/// One dump entry: the parsed payload on 200, an error marker otherwise.
fn batch_entry(status: u16, body: &str) -> Result<Value, OpenAqError> {
    if status == 200 {
        payload::extract_payload(status, body)
    } else {
        Ok(json!({ "error": status }))
    }
}
