use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::render::FactLayout;

/// Command line arguments. Anything not given falls back to the loaded config.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "animal-cards",
    version,
    about = "Render animal records from JSON into an HTML card page"
)]
pub struct Args {
    /// Animal data JSON (default: animals_data.json).
    pub data: Option<PathBuf>,
    /// HTML template containing the placeholder (default: animals_template.html).
    pub template: Option<PathBuf>,
    /// Output HTML path (default: animals.html).
    pub output: Option<PathBuf>,

    /// Settings file (toml, json, yaml...). Defaults to ./animal-cards.* when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Token in the template that is replaced by the cards.
    #[arg(long)]
    pub placeholder: Option<String>,
    /// Fact layout inside each card: list or paragraph.
    #[arg(long, value_parser = parse_layout)]
    pub layout: Option<FactLayout>,
    /// Keep names as written instead of upper-casing titles.
    #[arg(long)]
    pub keep_case: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Apply explicit flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if self.keep_case {
            config.uppercase_titles = false;
        }
    }

    /// Default tracing directive for this crate.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "animal_cards=warn";
        }
        match self.verbose {
            0 => "animal_cards=info",
            1 => "animal_cards=debug",
            _ => "animal_cards=trace",
        }
    }
}

/// Layout parser for `--layout`.
pub fn parse_layout(s: &str) -> Result<FactLayout, String> {
    s.parse()
}
