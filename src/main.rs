mod cli;
mod error;
mod github;
mod headers;
mod pagination;
mod pipeline;
mod random;
mod template;
mod types;

use clap::Parser;
use cli::Cli;
use error::Result;
use github::GitHubClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the rendered fragment.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // We need the username!
    let Some(user) = cli.user else {
        debug!("no user login available, nothing to do");
        return Ok(());
    };

    let client = GitHubClient::with_base_url(&cli.api_url)?;
    match pipeline::run(&client, &user).await {
        Ok(Some(fragment)) => println!("{}", fragment),
        Ok(None) => debug!("no favorite to render"),
        Err(err) => debug!("favorite lookup failed: {}", err),
    }

    Ok(())
}
