//! Normalization of OpenAQ monthly results into a uniform table.
//!
//! The v3 monthly endpoint has no fixed schema: the period may be nested
//! under `period.datetimeFrom`/`datetimeTo` (each either `{utc, local}`
//! strings or `{year, month}` integers) or appear flat, units may live under
//! `parameter.units`, and observation counts under `coverage.observedCount`.
//! Each field is resolved through an ordered list of fallbacks.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Month label assigned when no usable date field exists.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Label format for normalized months: "YYYY-MM".
const MONTH_FORMAT: &str = "%Y-%m";

/// One normalized monthly average row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: String,
    pub value: Option<f64>,
    pub unit: String,
    pub count: Option<i64>,
}

impl MonthlyRecord {
    /// Flatten one raw API record, tolerating absent or null fields.
    pub fn from_raw(item: &Value) -> Self {
        let period = non_null(item.get("period")).filter(|p| p.is_object());
        let date_source = non_null(period.and_then(|p| p.get("datetimeFrom")))
            .or_else(|| non_null(period.and_then(|p| p.get("datetimeTo"))))
            .or_else(|| non_null(item.get("datetimeFrom")))
            .or_else(|| non_null(item.get("datetimeTo")))
            .or_else(|| non_null(item.get("date")));

        let value = item.get("value").and_then(Value::as_f64);

        let unit = item
            .get("unit")
            .and_then(Value::as_str)
            .or_else(|| {
                item.get("parameter")
                    .and_then(|p| p.get("units"))
                    .and_then(Value::as_str)
            })
            .unwrap_or("")
            .to_string();

        let count = item
            .get("count")
            .and_then(as_count)
            .or_else(|| {
                item.get("coverage")
                    .and_then(|c| c.get("observedCount"))
                    .and_then(as_count)
            });

        MonthlyRecord {
            month: parse_month_label(date_source),
            value,
            unit,
            count,
        }
    }
}

/// Normalize a raw `results` list into an ordered monthly table.
///
/// Rows without a value are dropped; the rest are sorted ascending by month
/// label. "Unknown" sorts by its literal value, which is accepted. An empty
/// input yields an empty table.
pub fn normalize_monthly_results(results: &[Value]) -> Vec<MonthlyRecord> {
    let mut rows: Vec<MonthlyRecord> = results
        .iter()
        .map(MonthlyRecord::from_raw)
        .filter(|row| row.value.is_some())
        .collect();
    rows.sort_by(|a, b| a.month.cmp(&b.month));
    rows
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn as_count(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

/// Resolve the API date object into a "YYYY-MM" label, or "Unknown".
///
/// A structured DatetimeObject prefers its `utc` string, then `local`, then
/// `{year, month}` integers with the day fixed to the 1st.
fn parse_month_label(raw: Option<&Value>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_MONTH.to_string();
    };
    let parsed = match raw {
        Value::String(s) => parse_datetime(s),
        Value::Object(obj) => {
            if let Some(utc) = obj.get("utc").and_then(Value::as_str) {
                parse_datetime(utc)
            } else if let Some(local) = obj.get("local").and_then(Value::as_str) {
                parse_datetime(local)
            } else {
                let year = obj.get("year").and_then(Value::as_i64);
                let month = obj.get("month").and_then(Value::as_i64);
                match (year, month) {
                    (Some(y), Some(m)) if (1..=12).contains(&m) => {
                        NaiveDate::from_ymd_opt(y as i32, m as u32, 1)
                    }
                    _ => None,
                }
            }
        }
        _ => None,
    };
    match parsed {
        Some(date) => date.format(MONTH_FORMAT).to_string(),
        None => UNKNOWN_MONTH.to_string(),
    }
}

/// Parse a datetime string in the formats OpenAQ emits.
fn parse_datetime(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
