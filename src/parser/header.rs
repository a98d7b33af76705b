//! Bulletin header and typhoon name extraction

use super::fields::{optional_text, parse_u32, required, required_text};
use crate::constants::envelope::BULLETIN_TITLE;
use crate::constants::tags;
use crate::document::{Document, Element, TagQuery};
use crate::error::{BulletinError, Result};
use crate::models::BulletinSummary;
use crate::timestamp::convert_type_a;
use tracing::debug;

/// Extract report metadata from `Head` and the typhoon's identity from the
/// first `MeteorologicalInfo` block
pub fn parse_summary(document: &Document) -> Result<BulletinSummary> {
    let head = document
        .find(&TagQuery::tag(tags::HEAD))
        .ok_or_else(|| BulletinError::missing(tags::HEAD))?;

    let report_timestamp = convert_type_a(&required_text(
        head,
        &TagQuery::tag(tags::REPORT_DATE_TIME),
    )?)?;
    let target_timestamp = convert_type_a(&required_text(
        head,
        &TagQuery::tag(tags::TARGET_DATE_TIME),
    )?)?;
    let case_id = required_text(head, &TagQuery::tag(tags::EVENT_ID))?;
    let serial = required_text(head, &TagQuery::tag(tags::SERIAL))?;
    let report_no = parse_u32(&serial, "Head/Serial")?;

    let first_info = first_meteorological_info(document)?;
    let name_part = required(first_info, &TagQuery::tag(tags::TYPHOON_NAME_PART))?;

    let summary = BulletinSummary {
        title: BULLETIN_TITLE.to_string(),
        report_timestamp,
        target_timestamp,
        typhoon_name: required_text(name_part, &TagQuery::tag(tags::NAME))?,
        typhoon_name_kana: required_text(name_part, &TagQuery::tag(tags::NAME_KANA))?,
        typhoon_number: required_text(name_part, &TagQuery::tag(tags::NUMBER))?,
        remark: optional_text(name_part, &TagQuery::tag(tags::REMARK)),
        case_id,
        report_no,
    };

    debug!(
        "Parsed header: typhoon {} ({}), report no {}",
        summary.typhoon_number, summary.typhoon_name, summary.report_no
    );

    Ok(summary)
}

/// The `MeteorologicalInfos` container holding the per-time-point blocks
pub fn meteorological_infos(document: &Document) -> Result<&Element> {
    document
        .find(&TagQuery::tag(tags::METEOROLOGICAL_INFOS))
        .ok_or_else(|| BulletinError::missing(tags::METEOROLOGICAL_INFOS))
}

fn first_meteorological_info(document: &Document) -> Result<&Element> {
    let infos = meteorological_infos(document)?;
    required(infos, &TagQuery::tag(tags::METEOROLOGICAL_INFO))
}
