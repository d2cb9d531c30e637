use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::GeneratorError;
use crate::models::Dataset;
use crate::render::{build_cards, fill_template};
use crate::utils::fs::{read_text, write_text};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output_path: PathBuf,
    pub animals: usize,
}

/// Read the template and data, render the cards and write the page.
pub fn generate(config: &Config) -> Result<Summary, GeneratorError> {
    let template = read_text(&config.template_path).map_err(|source| GeneratorError::ReadTemplate {
        path: config.template_path.display().to_string(),
        source,
    })?;

    let data_path = config.data_path.display().to_string();
    let text = read_text(&config.data_path).map_err(|source| GeneratorError::ReadData {
        path: data_path.clone(),
        source,
    })?;
    let dataset = Dataset::from_json_str(&text).map_err(|source| GeneratorError::ParseData {
        path: data_path.clone(),
        source,
    })?;
    info!("Loaded {} animals from {}", dataset.len(), data_path);

    let cards = build_cards(&dataset, &config.render_options());
    let page = fill_template(&template, &config.placeholder, &cards);

    write_text(&config.output_path, &page).map_err(|source| GeneratorError::Write {
        path: config.output_path.display().to_string(),
        source,
    })?;

    Ok(Summary {
        output_path: config.output_path.clone(),
        animals: dataset.len(),
    })
}
