mod input;
mod pipeline;
mod present;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use linsight_openrouter::OpenRouterClient;
use linsight_rapidapi::RapidApiClient;
use tracing_subscriber::EnvFilter;

use crate::pipeline::{Outcome, Pipeline};

#[derive(Debug, Parser)]
#[command(name = "linsight")]
#[command(about = "Fetch a LinkedIn profile and its recent posts, then ask an LLM to analyze them")]
struct Cli {
    /// Profile URL; prompts on stdin when omitted
    #[arg(long)]
    url: Option<String>,

    /// Maximum number of posts to fetch (overrides LINSIGHT_MAX_POSTS)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_posts: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = linsight_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let max_posts = cli.max_posts.unwrap_or(config.max_posts);
    let profile_url = match cli.url {
        Some(url) => url,
        None => input::read_profile_url(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let data = RapidApiClient::from_config(&config)?;
    let completion = OpenRouterClient::from_config(&config)?;
    let pipeline = Pipeline::new(&data, &completion, max_posts);

    let mut stdout = io::stdout();
    match pipeline.run(&profile_url, &mut stdout).await {
        Ok(Outcome::Analyzed { segments }) => {
            tracing::info!(segments, "analysis complete");
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::NoPosts) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(stage = %err.stage(), error = %err, "pipeline failed");
            present::failure(&mut stdout, &err)?;
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
