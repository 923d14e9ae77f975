//! Sidebar inputs and the "Run API query" trigger.

use crate::query;
use crate::state::{QueryState, ISO_CODE};
use dioxus::prelude::*;

const LABEL_STYLE: &str = "display: block; font-weight: 500; color: #555; margin: 12px 0 4px;";
const INPUT_STYLE: &str =
    "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; box-sizing: border-box;";

/// Query input panel: API key, sensor ID, date range, threshold, run button.
#[component]
pub fn QueryControls() -> Element {
    let mut state = use_context::<QueryState>();
    let api_key = (state.api_key_input)();
    let sensor_id = (state.sensor_id_input)();
    let start_date = (state.start_date)();
    let end_date = (state.end_date)();
    let threshold = (state.threshold_input)();

    rsx! {
        div {
            style: "background: #ffffff; border-radius: 6px; box-shadow: 0 6px 16px rgba(0,0,0,0.06); padding: 16px;",

            label {
                style: "{LABEL_STYLE}",
                "OpenAQ API key (optional)"
            }
            input {
                r#type: "password",
                style: "{INPUT_STYLE}",
                placeholder: "Uses X-API-Key from .env if blank",
                value: "{api_key}",
                oninput: move |evt| state.api_key_input.set(evt.value()),
            }

            div {
                style: "margin: 12px 0 4px;",
                strong { "Location: " }
                "{ISO_CODE}"
            }

            label {
                style: "{LABEL_STYLE}",
                "PM2.5 sensor ID"
            }
            input {
                r#type: "number",
                min: "1",
                style: "{INPUT_STYLE}",
                value: "{sensor_id}",
                oninput: move |evt| state.sensor_id_input.set(evt.value()),
            }

            label {
                style: "{LABEL_STYLE}",
                "Date range"
            }
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "date",
                    style: "{INPUT_STYLE}",
                    value: "{start_date}",
                    oninput: move |evt| state.start_date.set(evt.value()),
                }
                input {
                    r#type: "date",
                    style: "{INPUT_STYLE}",
                    value: "{end_date}",
                    oninput: move |evt| state.end_date.set(evt.value()),
                }
            }

            label {
                style: "{LABEL_STYLE}",
                "PM2.5 health threshold (µg/m³)"
            }
            input {
                r#type: "number",
                min: "1",
                step: "1",
                style: "{INPUT_STYLE}",
                value: "{threshold}",
                oninput: move |evt| state.threshold_input.set(evt.value()),
            }

            button {
                style: "width: 100%; margin-top: 16px; padding: 10px 16px; background: #1a73e8; color: #ffffff; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;",
                onclick: move |_| {
                    spawn(async move {
                        query::run_query(state).await;
                    });
                },
                "Run API query"
            }

            p {
                style: "color: #6c757d; font-size: 13px; margin-top: 12px;",
                "Tip: Adjust the date range or sensor ID, then click Run to load data."
            }
        }
    }
}
