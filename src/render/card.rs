use std::fmt::Write;

use tracing::trace;

use super::escape::escape_html;
use super::{FactLayout, RenderOptions};
use crate::models::{fact_attributes, Record, NAME};
use crate::resolver::FieldResolver;

/// A label/value pair shown on a card. The value is not escaped yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

/// Card title, if the record has a name.
pub fn card_title(resolver: &FieldResolver<'_>, options: &RenderOptions) -> Option<String> {
    let name = resolver.get(NAME.aliases)?.display(NAME.pick)?;

    if options.uppercase_titles {
        Some(name.to_uppercase())
    } else {
        Some(name)
    }
}

/// Facts for every attribute the record has, core attributes first.
pub fn collect_facts(resolver: &FieldResolver<'_>) -> Vec<Fact> {
    fact_attributes()
        .filter_map(|attribute| {
            let value = resolver.get(attribute.aliases)?.display(attribute.pick)?;
            Some(Fact { label: attribute.label, value })
        })
        .collect()
}

/// Render one record as a card list item.
///
/// Returns an empty string when the record has neither a name nor any fact.
pub fn serialize_animal(record: &Record, options: &RenderOptions) -> String {
    let resolver = FieldResolver::with_sections(record, options.nested_sections.as_slice());
    let title = card_title(&resolver, options);
    let facts = collect_facts(&resolver);

    if title.is_none() && facts.is_empty() {
        trace!("Record with {} keys has nothing to show", record.len());
        return String::new();
    }

    let mut item = String::from("  <li class=\"cards__item\">\n");

    if let Some(title) = title {
        let _ = writeln!(item, "    <div class=\"card__title\">{}</div>", escape_html(&title));
    }

    if !facts.is_empty() {
        match options.layout {
            FactLayout::List => write_fact_list(&mut item, &facts),
            FactLayout::Paragraph => write_fact_paragraph(&mut item, &facts),
        }
    }

    item.push_str("  </li>\n");
    item
}

fn write_fact_list(out: &mut String, facts: &[Fact]) {
    out.push_str("    <ul class=\"card__facts\">\n");
    for fact in facts {
        let _ = writeln!(
            out,
            "      <li class=\"card__fact\"><strong>{}:</strong> {}</li>",
            fact.label,
            escape_html(&fact.value)
        );
    }
    out.push_str("    </ul>\n");
}

fn write_fact_paragraph(out: &mut String, facts: &[Fact]) {
    out.push_str("    <p class=\"card__text\">\n");
    for fact in facts {
        let _ = writeln!(
            out,
            "      <strong>{}:</strong> {}<br/>",
            fact.label,
            escape_html(&fact.value)
        );
    }
    out.push_str("    </p>\n");
}
