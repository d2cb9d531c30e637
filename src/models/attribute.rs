/// How a list value is shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Only the first element.
    First,
    /// All elements joined with ", ".
    Join,
}

/// A displayed attribute: its label and the key names that may hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    pub pick: Pick,
}

impl Attribute {
    const fn new(label: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { label, aliases, pick: Pick::Join }
    }

    const fn first(label: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { label, aliases, pick: Pick::First }
    }
}

pub const NAME: Attribute = Attribute::new("Name", &["name"]);

/// Always considered, in this order.
pub const CORE_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("Diet", &["diet"]),
    Attribute::first("Location", &["locations", "location"]),
    Attribute::new("Type", &["type"]),
];

/// Shown after the core attributes, only when present.
pub const EXTRA_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("Lifespan", &["lifespan", "life_span", "life span"]),
    Attribute::new("Weight", &["weight"]),
    Attribute::new("Length", &["length"]),
    Attribute::new("Height", &["height"]),
    Attribute::new("Top speed", &["top_speed", "top speed", "topspeed"]),
    Attribute::new("Habitat", &["habitat"]),
    Attribute::new("Temperament", &["temperament", "group_behavior"]),
    Attribute::new("Color(s)", &["color", "colors", "colour", "colours"]),
    Attribute::new("Scientific name", &["scientific_name", "scientific name", "scientificname"]),
    Attribute::new("Family", &["family"]),
    Attribute::new("Order", &["order"]),
    Attribute::new("Class", &["class"]),
    Attribute::new("Geo range", &["geo_range", "geographic_range", "range"]),
    Attribute::new("Conservation status", &["conservation_status", "conservation status", "status"]),
    Attribute::new("Fun fact", &["fun_fact", "fun fact", "slogan"]),
    Attribute::new("Description", &["description", "summary"]),
];

/// Core then extra attributes, in display order.
pub fn fact_attributes() -> impl Iterator<Item = &'static Attribute> {
    CORE_ATTRIBUTES.iter().chain(EXTRA_ATTRIBUTES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = fact_attributes().map(|a| a.label).collect();
        assert_eq!(labels.len(), CORE_ATTRIBUTES.len() + EXTRA_ATTRIBUTES.len());
    }

    #[test]
    fn aliases_are_lowercase() {
        for attribute in fact_attributes().chain(std::iter::once(&NAME)) {
            for alias in attribute.aliases {
                assert_eq!(*alias, alias.to_lowercase(), "alias of {}", attribute.label);
            }
        }
    }

    #[test]
    fn only_location_picks_first() {
        let firsts: Vec<_> = fact_attributes().filter(|a| a.pick == Pick::First).map(|a| a.label).collect();
        assert_eq!(firsts, vec!["Location"]);
    }
}
