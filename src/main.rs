use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use animal_cards::cli::Args;
use animal_cards::config::Config;
use animal_cards::generator;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(args.log_directive().parse()?),
        )
        .init();

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);

    info!(
        "Rendering {} into {}",
        config.data_path.display(),
        config.template_path.display()
    );

    let summary = generator::generate(&config)?;

    println!(
        "Wrote {} with {} animals.",
        summary.output_path.display(),
        summary.animals
    );

    Ok(())
}
