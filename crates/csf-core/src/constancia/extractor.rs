//! Rule-driven field extraction.

use tracing::{debug, trace};

use super::catalog::{FieldCatalog, FieldRule, ISSUANCE, RFC};
use crate::models::record::{FieldMap, NOT_AVAILABLE};

/// Applies a [`FieldCatalog`] to normalized text.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'a> {
    catalog: &'a FieldCatalog,
}

impl FieldExtractor<'static> {
    /// Extractor over the built-in SAT catalog.
    pub fn new() -> Self {
        Self {
            catalog: FieldCatalog::builtin(),
        }
    }
}

impl Default for FieldExtractor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FieldExtractor<'a> {
    /// Extractor over a custom catalog.
    pub fn with_catalog(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a FieldCatalog {
        self.catalog
    }

    /// Produce one entry per catalog rule, then run the post-processing pass.
    pub fn extract(&self, text: &str) -> FieldMap {
        let mut fields = FieldMap::with_capacity(self.catalog.len());

        for rule in self.catalog.rules() {
            let value = apply_rule(rule, text);
            trace!("{} -> {:?}", rule.name(), value);
            fields.push(rule.name(), value);
        }

        post_process(&mut fields);

        debug!(
            "Extracted {}/{} fields",
            fields.available_count(),
            fields.len()
        );
        fields
    }
}

/// Extract fields from normalized text with the built-in catalog.
pub fn extract_fields(text: &str) -> FieldMap {
    FieldExtractor::new().extract(text)
}

/// First match only; groups are trimmed and joined with a single space.
fn apply_rule(rule: &FieldRule, text: &str) -> String {
    let Some(caps) = rule.pattern().captures(text) else {
        return NOT_AVAILABLE.to_string();
    };

    let joined = caps
        .iter()
        .skip(1)
        .map(|group| group.map_or("", |m| m.as_str().trim()))
        .collect::<Vec<_>>()
        .join(" ");

    or_not_available(joined.trim())
}

/// Fixups that depend on other fields. Runs after every rule has been applied.
fn post_process(fields: &mut FieldMap) {
    strip_rfc_from_issuance(fields);
}

/// The issuance pattern swallows the RFC printed on the line after the date.
fn strip_rfc_from_issuance(fields: &mut FieldMap) {
    let rfc = match fields.get(RFC) {
        Some(rfc) if rfc != NOT_AVAILABLE => rfc.to_string(),
        _ => return,
    };

    if let Some(issuance) = fields.get_mut(ISSUANCE) {
        if *issuance == NOT_AVAILABLE || !issuance.contains(&rfc) {
            return;
        }
        let stripped = issuance.replace(&rfc, "");
        *issuance = or_not_available(stripped.trim());
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}
