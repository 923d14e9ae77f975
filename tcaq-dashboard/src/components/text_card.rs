//! Titled text card for status, summary, and locations output.

use dioxus::prelude::*;

/// Displays a block of preformatted text under a card header.
#[component]
pub fn TextCard(title: String, body: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; background: #ffffff; border-radius: 6px; box-shadow: 0 6px 16px rgba(0,0,0,0.06); padding: 16px; min-width: 220px;",
            div {
                style: "font-weight: 600; margin-bottom: 8px; color: #2c3e50;",
                "{title}"
            }
            div {
                style: "white-space: pre-wrap; color: #333; font-size: 14px;",
                "{body}"
            }
        }
    }
}
