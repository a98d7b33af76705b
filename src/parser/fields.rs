//! Field lookup utilities for bulletin elements
//!
//! Required lookups fail with a `MalformedBulletin` error naming the
//! missing element. Optional lookups return a typed default (`""` or `0`)
//! instead, and are kept as separate functions so call sites state which
//! policy applies.

use crate::document::{Element, TagQuery};
use crate::error::{BulletinError, Result};

/// Get a required descendant element
pub fn required<'a>(parent: &'a Element, query: &TagQuery<'_>) -> Result<&'a Element> {
    parent
        .find(query)
        .ok_or_else(|| BulletinError::missing(field_name(parent, query)))
}

/// Get the trimmed text of a required element
pub fn required_text(parent: &Element, query: &TagQuery<'_>) -> Result<String> {
    required(parent, query).map(Element::text)
}

/// Get the trimmed text of an optional element, or an empty string
pub fn optional_text(parent: &Element, query: &TagQuery<'_>) -> String {
    parent.find(query).map(Element::text).unwrap_or_default()
}

/// Parse a required non-negative integer element
pub fn required_u32(parent: &Element, query: &TagQuery<'_>) -> Result<u32> {
    let text = required_text(parent, query)?;
    parse_u32(&text, &field_name(parent, query))
}

/// Parse an optional non-negative integer element; absent or empty text gives 0
pub fn optional_u32(parent: &Element, query: &TagQuery<'_>) -> Result<u32> {
    match parent.find(query) {
        Some(element) => zero_if_empty(&element.text(), &field_name(parent, query)),
        None => Ok(0),
    }
}

/// Parse integer text, treating an empty string as 0
pub fn zero_if_empty(text: &str, field: &str) -> Result<u32> {
    if text.is_empty() {
        Ok(0)
    } else {
        parse_u32(text, field)
    }
}

/// Parse integer text
pub fn parse_u32(text: &str, field: &str) -> Result<u32> {
    text.parse::<u32>().map_err(|e| {
        BulletinError::malformed(
            field,
            format!("invalid integer '{}' ({})", text, e),
        )
    })
}

fn field_name(parent: &Element, query: &TagQuery<'_>) -> String {
    format!("{}/{}", parent.name(), query.describe())
}
