pub mod card;
pub mod escape;

pub use card::{collect_facts, serialize_animal, Fact};
pub use escape::escape_html;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Record, CHARACTERISTICS_KEY};

/// How facts are laid out inside a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactLayout {
    /// `<ul>` with one `<li>` per fact.
    #[default]
    List,
    /// A `<p>` block with facts separated by `<br/>`.
    Paragraph,
}

impl FromStr for FactLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(FactLayout::List),
            "paragraph" => Ok(FactLayout::Paragraph),
            other => Err(format!("unknown layout '{other}' (expected list or paragraph)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub uppercase_titles: bool,
    pub layout: FactLayout,
    /// Nested maps searched, in order, when a field is missing at the top level.
    pub nested_sections: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            uppercase_titles: true,
            layout: FactLayout::default(),
            nested_sections: vec![CHARACTERISTICS_KEY.to_string()],
        }
    }
}

/// Render every record and concatenate the fragments in input order.
pub fn build_cards<'a, I>(records: I, options: &RenderOptions) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut rendered = 0usize;
    let cards: String = records
        .into_iter()
        .map(|record| serialize_animal(record, options))
        .inspect(|fragment| {
            if !fragment.is_empty() {
                rendered += 1;
            }
        })
        .collect();

    debug!("Rendered {} cards", rendered);
    cards
}

/// Replace the first occurrence of `placeholder` with `cards`.
///
/// A template without the placeholder comes back unchanged.
pub fn fill_template(template: &str, placeholder: &str, cards: &str) -> String {
    if placeholder.is_empty() || !template.contains(placeholder) {
        debug!("Placeholder '{}' not found in template", placeholder);
        return template.to_string();
    }

    template.replacen(placeholder, cards, 1)
}
