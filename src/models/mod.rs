pub mod attribute;
pub mod dataset;
pub mod record;

pub use attribute::*;
pub use dataset::*;
pub use record::*;

// Nested section searched when a field is missing at the top level
pub const CHARACTERISTICS_KEY: &str = "characteristics";

// Token replaced in the template
pub const DEFAULT_PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
