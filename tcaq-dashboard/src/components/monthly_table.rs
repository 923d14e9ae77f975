//! Monthly PM2.5 averages rendered as a plain table.

use crate::state::QueryState;
use dioxus::prelude::*;

const CELL_STYLE: &str = "padding: 8px 12px; border-bottom: 1px solid #eee; text-align: left;";

/// Table of normalized monthly rows. Degrades to a single "No data"
/// placeholder row when the table is empty.
#[component]
pub fn MonthlyTable() -> Element {
    let state = use_context::<QueryState>();
    let monthly = (state.monthly)();

    let rows: Vec<[String; 4]> = if monthly.is_empty() {
        vec![[
            "No data".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ]]
    } else {
        monthly
            .iter()
            .map(|row| {
                [
                    row.month.clone(),
                    row.value.map(|v| v.to_string()).unwrap_or_default(),
                    row.unit.clone(),
                    row.count.map(|c| c.to_string()).unwrap_or_default(),
                ]
            })
            .collect()
    };

    rsx! {
        div {
            style: "background: #ffffff; border-radius: 6px; box-shadow: 0 6px 16px rgba(0,0,0,0.06); padding: 16px; margin-top: 16px;",
            div {
                style: "font-weight: 600; margin-bottom: 8px; color: #2c3e50;",
                "Monthly PM2.5 averages"
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "{CELL_STYLE} font-weight: 600;", "month" }
                        th { style: "{CELL_STYLE} font-weight: 600;", "value" }
                        th { style: "{CELL_STYLE} font-weight: 600;", "unit" }
                        th { style: "{CELL_STYLE} font-weight: 600;", "count" }
                    }
                }
                tbody {
                    for [month, value, unit, count] in rows {
                        tr {
                            td { style: "{CELL_STYLE}", "{month}" }
                            td { style: "{CELL_STYLE}", "{value}" }
                            td { style: "{CELL_STYLE}", "{unit}" }
                            td { style: "{CELL_STYLE}", "{count}" }
                        }
                    }
                }
            }
        }
    }
}
