//! Descriptive statistics over the normalized monthly table.

use crate::monthly::MonthlyRecord;
use std::cmp::Ordering;

/// Build the three-line health summary for a normalized monthly table.
///
/// Reports the mean and max PM2.5, how many months meet or exceed the
/// threshold, and the three worst months by value (stable descending sort,
/// so ties keep the table's order).
pub fn build_summary(monthly: &[MonthlyRecord], threshold: f64) -> String {
    if monthly.is_empty() {
        return "No monthly data available to summarize.".to_string();
    }

    let values: Vec<f64> = monthly.iter().filter_map(|row| row.value).collect();
    let total_count = monthly.len();
    let above_count = values.iter().filter(|v| **v >= threshold).count();
    let above_pct = if total_count > 0 {
        (above_count as f64 / total_count as f64) * 100.0
    } else {
        0.0
    };

    let mut by_value: Vec<&MonthlyRecord> = monthly.iter().collect();
    by_value.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    let worst_months: Vec<&str> = by_value
        .iter()
        .take(3)
        .map(|row| row.month.as_str())
        .collect();
    let worst_months_text = if worst_months.is_empty() {
        "No months found".to_string()
    } else {
        worst_months.join(", ")
    };

    let avg_value = values.iter().sum::<f64>() / values.len() as f64;
    let max_value = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    format!(
        "Average PM2.5: {:.2} µg/m³ | Max PM2.5: {:.2} µg/m³\n\
         Months above {:.0} µg/m³: {} ({:.1}%)\n\
         Worst months: {}",
        avg_value, max_value, threshold, above_count, above_pct, worst_months_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: &str, value: f64) -> MonthlyRecord {
        MonthlyRecord {
            month: month.to_string(),
            value: Some(value),
            unit: "µg/m³".to_string(),
            count: Some(30),
        }
    }

    #[test]
    fn test_summary_matches_expected_template() {
        let table = vec![row("2021-01", 40.0), row("2021-02", 10.0), row("2021-03", 60.0)];
        let summary = build_summary(&table, 35.0);
        assert_eq!(
            summary,
            "Average PM2.5: 36.67 µg/m³ | Max PM2.5: 60.00 µg/m³\n\
             Months above 35 µg/m³: 2 (66.7%)\n\
             Worst months: 2021-03, 2021-01, 2021-02"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            build_summary(&[], 35.0),
            "No monthly data available to summarize."
        );
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = vec![row("2021-01", 50.0), row("2021-02", 50.0), row("2021-03", 50.0)];
        let summary = build_summary(&table, 100.0);
        assert!(summary.contains("Worst months: 2021-01, 2021-02, 2021-03"));
        assert!(summary.contains("Months above 100 µg/m³: 0 (0.0%)"));
    }

    #[test]
    fn test_fewer_than_three_months() {
        let table = vec![row("2022-08", 12.0)];
        let summary = build_summary(&table, 35.0);
        assert!(summary.contains("Worst months: 2022-08"));
        assert!(summary.contains("Average PM2.5: 12.00 µg/m³ | Max PM2.5: 12.00 µg/m³"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let table = vec![row("2021-01", 35.0), row("2021-02", 34.9)];
        let summary = build_summary(&table, 35.0);
        assert!(summary.contains("Months above 35 µg/m³: 1 (50.0%)"));
    }
}
