//! Resolve VK mentions, links, IDs and screen names from the command line.
//!
//! ```text
//! vk-resolve @durov "[club1|VK]" https://vk.com/wall-1_2 -123
//! vk-resolve --json --offline club15 app7
//! ```

mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use futures::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vk_resolver::ResourceResolver;

use config::Config;
use output::{plain_line, Outcome};

#[derive(Parser)]
#[command(name = "vk-resolve")]
#[command(about = "Resolve VK resources into {id, ownerId, type}")]
struct Cli {
    /// Resources to resolve (IDs, mentions, URLs, screen names)
    #[arg(required = true, allow_negative_numbers = true)]
    resources: Vec<String>,

    /// Print one JSON object per resource
    #[arg(long)]
    json: bool,

    /// Never call the VK API; screen names that need a lookup fail
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,vk_resolver=info,vk_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let resolver = ResourceResolver::from_arc(config.lookup(cli.offline)?);

    let results = join_all(cli.resources.iter().map(|r| resolver.resolve(r.as_str()))).await;

    let mut failures = 0;
    for (input, result) in cli.resources.iter().zip(&results) {
        if result.is_err() {
            failures += 1;
        }

        if cli.json {
            let line = serde_json::to_string(&Outcome::new(input, result))
                .context("Failed to serialize result")?;
            println!("{}", line);
        } else {
            println!("{}", plain_line(input, result));
        }
    }

    if failures > 0 {
        bail!("{} of {} resources failed to resolve", failures, results.len());
    }

    Ok(())
}
