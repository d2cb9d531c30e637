//! Render animal records from a JSON data file into an HTML card page.
//!
//! Records are resolved field by field with case-insensitive, alias-aware
//! lookup that falls back to a nested `characteristics` map, rendered into
//! escaped card fragments and substituted into a template placeholder.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod render;
pub mod resolver;
pub mod utils;

pub use error::GeneratorError;
pub use models::{Dataset, FieldValue, Record};
pub use render::{build_cards, fill_template, serialize_animal, RenderOptions};
pub use resolver::{get_ci, get_field};
