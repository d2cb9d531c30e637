use std::path::{Path, PathBuf};

use ::config::{Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeneratorError;
use crate::models::{CHARACTERISTICS_KEY, DEFAULT_PLACEHOLDER};
use crate::render::{FactLayout, RenderOptions};

/// Settings file looked up in the working directory (any format `config` knows).
pub const DEFAULT_CONFIG_NAME: &str = "animal-cards";

/// Prefix for environment overrides, e.g. `ANIMAL_CARDS_PLACEHOLDER`.
pub const ENV_PREFIX: &str = "ANIMAL_CARDS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub placeholder: String,
    pub uppercase_titles: bool,
    pub layout: FactLayout,
    pub nested_sections: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("animals_data.json"),
            template_path: PathBuf::from("animals_template.html"),
            output_path: PathBuf::from("animals.html"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            uppercase_titles: true,
            layout: FactLayout::List,
            nested_sections: vec![CHARACTERISTICS_KEY.to_string()],
        }
    }
}

impl Config {
    /// Layer defaults, a settings file and `ANIMAL_CARDS_*` variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, GeneratorError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, GeneratorError> {
        let file = match path {
            Some(path) => File::with_name(&path.to_string_lossy()).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = ::config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("nested_sections"),
            )
            .build()?
            .try_deserialize::<Config>()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            uppercase_titles: self.uppercase_titles,
            layout: self.layout,
            nested_sections: self.nested_sections.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn defaults_match_render_defaults() {
        assert_eq!(Config::default().render_options(), RenderOptions::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.toml");
        fs::write(
            &path,
            r#"
placeholder = "{{CARDS}}"
uppercase_titles = false
layout = "paragraph"
nested_sections = ["characteristics", "taxonomy"]
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.placeholder, "{{CARDS}}");
        assert!(!config.uppercase_titles);
        assert_eq!(config.layout, FactLayout::Paragraph);
        assert_eq!(config.nested_sections, vec!["characteristics", "taxonomy"]);
        assert_eq!(config.data_path, PathBuf::from("animals_data.json"));
    }

    #[test]
    fn environment_overrides_scalars_and_lists() {
        // Prefix is private to this test so parallel tests never see it
        let prefix = "ANIMAL_CARDS_ENV_LAYER_TEST";
        std::env::set_var(format!("{prefix}_UPPERCASE_TITLES"), "false");
        std::env::set_var(format!("{prefix}_LAYOUT"), "paragraph");
        std::env::set_var(format!("{prefix}_NESTED_SECTIONS"), "characteristics,taxonomy");

        let config = Config::load_with_prefix(None, prefix).unwrap();
        assert!(!config.uppercase_titles);
        assert_eq!(config.layout, FactLayout::Paragraph);
        assert_eq!(config.nested_sections, vec!["characteristics", "taxonomy"]);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn environment_single_section() {
        let prefix = "ANIMAL_CARDS_ENV_SINGLE_TEST";
        std::env::set_var(format!("{prefix}_NESTED_SECTIONS"), "characteristics");

        let config = Config::load_with_prefix(None, prefix).unwrap();
        assert_eq!(config.nested_sections, vec!["characteristics"]);
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(GeneratorError::Config(_))));
    }
}
