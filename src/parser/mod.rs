//! Bulletin parser for JMA typhoon forecast-circle XML
//!
//! Walks one parsed [`Document`] and maps it onto the fixed [`Bulletin`]
//! schema. Parsing is a pure function of the document: any missing required
//! field, malformed center coordinate or invalid axis list aborts the whole
//! document with a typed error and no partial bulletin is returned.
//!
//! ## Architecture
//!
//! - [`header`] - `Head` metadata and typhoon name extraction
//! - [`observation`] - per-`MeteorologicalInfo` center, class and wind fields
//! - [`area`] - warning area and forecast circle geometry
//! - [`fields`] - required / optional-with-default lookups
//!
//! ## Usage
//!
//! ```rust
//! use typhoon_processor::parser::parse_bulletin_str;
//!
//! let xml = std::fs::read_to_string("bulletin.xml").unwrap_or_default();
//! if let Ok(bulletin) = parse_bulletin_str(&xml) {
//!     println!("{} observations", bulletin.observations.len());
//! }
//! ```

pub mod area;
pub mod fields;
pub mod header;
pub mod observation;

#[cfg(test)]
pub mod tests;

use crate::constants::tags;
use crate::document::{Document, TagQuery};
use crate::error::Result;
use crate::models::Bulletin;
use tracing::debug;

pub use area::parse_area;
pub use header::parse_summary;
pub use observation::{parse_lat_lon, parse_observation};

/// Parse one bulletin document
pub fn parse_bulletin(document: &Document) -> Result<Bulletin> {
    let summary = parse_summary(document)?;

    let observations = header::meteorological_infos(document)?
        .find_all(&TagQuery::tag(tags::METEOROLOGICAL_INFO))
        .into_iter()
        .map(parse_observation)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Parsed bulletin {} #{}: {} observations, {} areas",
        summary.case_id,
        summary.report_no,
        observations.len(),
        observations
            .iter()
            .map(|o| o.warning_areas.len())
            .sum::<usize>()
    );

    Ok(Bulletin {
        summary,
        observations,
    })
}

/// Parse XML text into a bulletin
pub fn parse_bulletin_str(xml: &str) -> Result<Bulletin> {
    let document = Document::parse(xml)?;
    parse_bulletin(&document)
}
