//! Tung Chung PM2.5 Stats Explainer
//!
//! Queries OpenAQ monthly PM2.5 averages for Hong Kong sensors, summarizes
//! health-threshold exceedances and worst months, and renders the results
//! reactively. The query runs once on startup with the default inputs and
//! again on every "Run API query" click.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

mod components;
mod query;
mod state;

use components::{MonthlyTable, NoticeBanner, QueryControls, TextCard};
use state::QueryState;

const APP_TITLE: &str = "Tung Chung PM2.5 Stats Explainer";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting PM2.5 dashboard");
    launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(QueryState::new);

    // Run the query once on startup with the default inputs. Later button
    // clicks go through QueryControls directly.
    use_effect(move || {
        let mut state = state;
        if (state.has_run_once)() {
            return;
        }
        state.has_run_once.set(true);
        spawn(async move {
            query::run_query(state).await;
        });
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 20px; font-family: sans-serif; background-color: #f6f7fb;",

            h1 {
                style: "color: #2c3e50; margin-bottom: 4px;",
                "{APP_TITLE}"
            }
            p {
                style: "color: #5f6368; margin-top: 0; margin-bottom: 20px;",
                "Query OpenAQ monthly averages and summarize health thresholds."
            }

            if let Some((message, is_error)) = (state.notice)() {
                NoticeBanner { message, is_error }
            }

            div {
                style: "display: flex; gap: 16px; align-items: flex-start;",

                div {
                    style: "flex: 0 0 320px;",
                    QueryControls {}
                }

                div {
                    style: "flex: 1;",
                    div {
                        style: "display: flex; gap: 16px;",
                        TextCard {
                            title: "Query status",
                            body: (state.status_message)(),
                        }
                        TextCard {
                            title: "Summary insights",
                            body: (state.summary_message)(),
                        }
                        TextCard {
                            title: "Locations found",
                            body: (state.locations_message)(),
                        }
                    }
                    MonthlyTable {}
                }
            }
        }
    }
}
