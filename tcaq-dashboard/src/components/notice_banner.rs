//! Transient success/error notice from the last query run.

use dioxus::prelude::*;

/// Displays the last run's notice in a styled banner.
#[component]
pub fn NoticeBanner(message: String, is_error: bool) -> Element {
    let style = if is_error {
        "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
    } else {
        "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;"
    };
    rsx! {
        div {
            style: "{style}",
            "{message}"
        }
    }
}
