//! Query orchestration: fetch, normalize, summarize, publish.
//!
//! Every trigger (on-load or button) runs the pipeline to completion and
//! then replaces the published state wholesale. A failure at any stage
//! publishes the fixed error texts; nothing from a previous run survives.

use crate::state::{QueryState, ISO_CODE};
use dioxus::prelude::WritableExt;
use dioxus_logger::tracing::{error, info};
use tcaq_openaq::api::{self, QueryOutcome, QueryParams};
use tcaq_openaq::error::OpenAqError;
use tcaq_openaq::monthly::MonthlyRecord;

/// The full set of published fields for one completed run.
struct Published {
    monthly: Vec<MonthlyRecord>,
    summary: String,
    locations: String,
    status: String,
    notice: (String, bool),
}

/// Map a pipeline result onto the published fields.
fn publish_outcome(result: Result<QueryOutcome, OpenAqError>) -> Published {
    match result {
        Ok(outcome) => Published {
            monthly: outcome.monthly,
            summary: outcome.summary,
            locations: outcome.locations,
            status: "Query completed successfully.".to_string(),
            notice: ("Data loaded successfully.".to_string(), false),
        },
        Err(err) => Published {
            monthly: Vec::new(),
            summary: "No insights available due to an error.".to_string(),
            locations: "No locations available due to an error.".to_string(),
            status: format!("Error: {}", err),
            notice: (format!("Query failed: {}", err), true),
        },
    }
}

/// Run the query pipeline once and publish the outcome.
pub async fn run_query(mut state: QueryState) {
    state.status_message.set("Running query...".to_string());

    let result = execute(&state).await;
    match &result {
        Ok(outcome) => info!("Query completed: {} monthly rows", outcome.monthly.len()),
        Err(err) => error!("Query failed: {}", err),
    }

    let published = publish_outcome(result);
    state.monthly.set(published.monthly);
    state.summary_message.set(published.summary);
    state.locations_message.set(published.locations);
    state.status_message.set(published.status);
    state.notice.set(Some(published.notice));
}

async fn execute(state: &QueryState) -> Result<QueryOutcome, OpenAqError> {
    let sensor_id: i64 = (state.sensor_id_input)()
        .trim()
        .parse()
        .map_err(|_| OpenAqError::Unexpected("Sensor ID must be a whole number.".to_string()))?;
    let threshold: f64 = (state.threshold_input)()
        .trim()
        .parse()
        .map_err(|_| OpenAqError::Unexpected("Threshold must be a number.".to_string()))?;

    let params = QueryParams {
        api_key_override: Some((state.api_key_input)()),
        iso_code: ISO_CODE.to_string(),
        sensor_id,
        start_date: (state.start_date)(),
        end_date: (state.end_date)(),
        threshold,
    };

    let client = api::build_client()?;
    api::run_query_pipeline(&client, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_run_publishes_fixed_texts_and_empty_table() {
        let published = publish_outcome(Err(OpenAqError::MissingCredential));
        assert!(published.monthly.is_empty());
        assert_eq!(published.summary, "No insights available due to an error.");
        assert_eq!(published.locations, "No locations available due to an error.");
        assert!(published.status.starts_with("Error: "));
        assert!(published.notice.1);
    }

    #[test]
    fn test_success_after_failure_leaves_no_stale_fields() {
        // A failed run followed by a success: every published field comes
        // from the new outcome, none from the failure.
        let failed = publish_outcome(Err(OpenAqError::ApiError {
            code: 500,
            message: "boom".to_string(),
        }));

        let outcome = QueryOutcome {
            monthly: vec![MonthlyRecord {
                month: "2021-01".to_string(),
                value: Some(12.0),
                unit: "µg/m³".to_string(),
                count: Some(31),
            }],
            summary: "summary text".to_string(),
            locations: "locations text".to_string(),
        };
        let succeeded = publish_outcome(Ok(outcome));

        assert_eq!(succeeded.monthly.len(), 1);
        assert_eq!(succeeded.summary, "summary text");
        assert_eq!(succeeded.locations, "locations text");
        assert_eq!(succeeded.status, "Query completed successfully.");
        assert_ne!(succeeded.status, failed.status);
        assert!(!succeeded.notice.1);
    }
}
