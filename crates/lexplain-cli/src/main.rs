//! Lexplain CLI - simplify legal documents into plain language.

use clap::Parser;
use lexplain_cli::{app, Cli, Config, Formatter, Result};
use lexplain_llm::GroqClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // File config provides defaults; flags override
    let file_config = Config::load().unwrap_or_default();
    let pipeline_config = file_config.pipeline_config(&cli);

    let mut llm = match &cli.api_key {
        Some(key) => GroqClient::new(key),
        None => GroqClient::from_env()?,
    };
    if let Some(endpoint) = &file_config.endpoint {
        llm = llm.with_endpoint(endpoint);
    }

    let (_, result) = app::run_pipeline(llm, pipeline_config, &cli.file).await?;

    let formatter = Formatter::new(!cli.no_color);
    print!("\n{}", formatter.preview(&result));

    Ok(())
}
