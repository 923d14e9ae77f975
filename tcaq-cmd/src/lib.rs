//! Command implementations for the tcaq CLI.
//!
//! Provides a one-shot OpenAQ query with a printed summary, plus a batch
//! dump of raw monthly results for the named Hong Kong PM2.5 sensors.

use clap::Subcommand;

pub mod batch;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Query OpenAQ monthly averages for one sensor and print a summary
    Query {
        /// PM2.5 sensor ID (Tung Chung station is 22471)
        #[arg(short, long, default_value_t = 22471)]
        sensor_id: i64,

        /// Start date, YYYY-MM-DD
        #[arg(long, default_value = "2020-01-01")]
        date_from: String,

        /// End date, YYYY-MM-DD
        #[arg(long, default_value = "2025-12-31")]
        date_to: String,

        /// PM2.5 health threshold in µg/m³
        #[arg(short, long, default_value_t = 35.0)]
        threshold: f64,

        /// ISO country code for the locations query
        #[arg(long, default_value = "HK")]
        iso: String,

        /// API key (falls back to the X-API-Key environment value)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Dump raw monthly results for the named Hong Kong sensors to a JSON file
    BatchQuery {
        /// Output path for the JSON dump (overwritten if present)
        #[arg(short, long, default_value = "monthly_averages.json")]
        output: String,

        /// Start date, YYYY-MM-DD
        #[arg(long, default_value = "2020-01-01")]
        date_from: String,

        /// End date, YYYY-MM-DD
        #[arg(long, default_value = "2025-12-31")]
        date_to: String,

        /// API key (falls back to the X-API-Key environment value)
        #[arg(long)]
        api_key: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            sensor_id,
            date_from,
            date_to,
            threshold,
            iso,
            api_key,
        } => {
            query::run_query(sensor_id, &date_from, &date_to, threshold, &iso, api_key).await
        }
        Command::BatchQuery {
            output,
            date_from,
            date_to,
            api_key,
        } => {
            batch::run_batch(&output, &date_from, &date_to, api_key.as_deref()).await
        }
    }
}
