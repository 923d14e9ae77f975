//! tcaq CLI - Command line tool for querying OpenAQ Hong Kong PM2.5 data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tcaq-cli",
    version,
    about = "Tung Chung PM2.5 stats toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tcaq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env in the project root supplies X-API-Key; a missing file is fine.
    dotenv::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    tcaq_cmd::run(cli.command).await
}
