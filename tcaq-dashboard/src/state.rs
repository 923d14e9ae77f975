//! Dashboard state managed via Dioxus context.
//!
//! `QueryState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<QueryState>()`. Query completions replace every published
//! signal wholesale; readers only ever see a fully-formed snapshot.

use dioxus::prelude::*;
use tcaq_openaq::monthly::MonthlyRecord;

/// The dashboard always queries Hong Kong monitoring locations.
pub const ISO_CODE: &str = "HK";

/// Default PM2.5 sensor: Tung Chung station.
pub const DEFAULT_SENSOR_ID: &str = "22471";
pub const DEFAULT_START_DATE: &str = "2020-01-01";
pub const DEFAULT_END_DATE: &str = "2025-12-31";
pub const DEFAULT_THRESHOLD: &str = "35";

/// Shared reactive state for the dashboard.
#[derive(Clone, Copy)]
pub struct QueryState {
    /// Normalized monthly table from the last completed query
    pub monthly: Signal<Vec<MonthlyRecord>>,
    /// Query status line
    pub status_message: Signal<String>,
    /// Statistical summary text
    pub summary_message: Signal<String>,
    /// Locations summary text
    pub locations_message: Signal<String>,
    /// Transient notice from the last run: (message, is_error)
    pub notice: Signal<Option<(String, bool)>>,
    /// Guard so the on-load trigger fires only once per session
    pub has_run_once: Signal<bool>,
    /// API key override (password input; empty means "use the environment")
    pub api_key_input: Signal<String>,
    /// Sensor ID input
    pub sensor_id_input: Signal<String>,
    /// Start date input ("YYYY-MM-DD")
    pub start_date: Signal<String>,
    /// End date input ("YYYY-MM-DD")
    pub end_date: Signal<String>,
    /// Health threshold input (µg/m³)
    pub threshold_input: Signal<String>,
}

impl QueryState {
    /// Create a new QueryState with startup placeholder values.
    pub fn new() -> Self {
        Self {
            monthly: Signal::new(Vec::new()),
            status_message: Signal::new("Running query on startup...".to_string()),
            summary_message: Signal::new("Loading...".to_string()),
            locations_message: Signal::new("Loading...".to_string()),
            notice: Signal::new(None),
            has_run_once: Signal::new(false),
            api_key_input: Signal::new(String::new()),
            sensor_id_input: Signal::new(DEFAULT_SENSOR_ID.to_string()),
            start_date: Signal::new(DEFAULT_START_DATE.to_string()),
            end_date: Signal::new(DEFAULT_END_DATE.to_string()),
            threshold_input: Signal::new(DEFAULT_THRESHOLD.to_string()),
        }
    }
}
