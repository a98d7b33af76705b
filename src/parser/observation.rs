//! Per-time-point observation extraction

use super::area::parse_area;
use super::fields::{optional_text, optional_u32, required, required_u32};
use crate::constants::{LAT_LON_PATTERN, attrs, tags};
use crate::document::{Element, TagQuery};
use crate::error::{BulletinError, Result};
use crate::models::{CenterKind, Observation};
use crate::timestamp::convert_type_a;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static LAT_LON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LAT_LON_PATTERN).expect("lat/lon pattern is valid"));

/// Extract one `MeteorologicalInfo` block
pub fn parse_observation(info: &Element) -> Result<Observation> {
    let date_time = required(info, &TagQuery::tag(tags::DATE_TIME))?;
    let target_timestamp = convert_type_a(&date_time.text())?;
    let target_timestamp_type = date_time.attr(attrs::TYPE).unwrap_or_default().to_string();

    let typhoon_class = optional_text(
        info,
        &TagQuery::tag(tags::TYPHOON_CLASS).with_attr(attrs::TYPE, attrs::TYPHOON_CLASS_TYPE),
    );
    let typhoon_strength = optional_text(
        info,
        &TagQuery::tag(tags::INTENSITY_CLASS).with_attr(attrs::TYPE, attrs::INTENSITY_CLASS_TYPE),
    );
    let typhoon_size = optional_text(
        info,
        &TagQuery::tag(tags::AREA_CLASS).with_attr(attrs::TYPE, attrs::AREA_CLASS_TYPE),
    );

    let center = required(info, &TagQuery::tag(tags::CENTER_PART))?;
    let coordinate = required(
        center,
        &TagQuery::any_of(&[tags::COORDINATE, tags::BASE_POINT])
            .with_attr(attrs::TYPE, attrs::CENTER_POSITION_TYPE),
    )?;
    let (latitude, longitude) = parse_lat_lon(&coordinate.text())?;
    let center_kind = if coordinate.name() == tags::COORDINATE {
        CenterKind::Coordinate
    } else {
        CenterKind::BasePoint
    };
    let point_accuracy = coordinate
        .attr(attrs::CONDITION)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    // Forecast centers nest an axis direction inside CenterPart, so movement
    // fields are read from direct children only
    let location = optional_text(center, &TagQuery::tag(tags::LOCATION).direct());
    let direction = optional_text(center, &TagQuery::tag(tags::DIRECTION).direct());
    let velocity = optional_u32(
        center,
        &TagQuery::tag(tags::SPEED)
            .with_attr(attrs::UNIT, attrs::UNIT_KM_PER_HOUR)
            .direct(),
    )?;
    let central_pressure = required_u32(center, &TagQuery::tag(tags::PRESSURE).direct())?;

    let (max_wind_speed_near_the_center, instantaneous_max_wind_speed) =
        match info.find(&TagQuery::tag(tags::WIND_PART)) {
            Some(wind) => (
                required_u32(wind, &wind_speed_query(attrs::MAX_WIND_SPEED_TYPE))?,
                required_u32(wind, &wind_speed_query(attrs::MAX_GUST_SPEED_TYPE))?,
            ),
            None => (0, 0),
        };

    let warning_areas = info
        .find_all(&TagQuery::any_of(&[
            tags::WARNING_AREA_PART,
            tags::PROBABILITY_CIRCLE,
        ]))
        .into_iter()
        .map(parse_area)
        .collect::<Result<Vec<_>>>()?;

    Ok(Observation {
        target_timestamp,
        target_timestamp_type,
        typhoon_class,
        typhoon_strength,
        typhoon_size,
        latitude,
        longitude,
        point_accuracy,
        center_kind,
        location,
        direction,
        velocity,
        central_pressure,
        max_wind_speed_near_the_center,
        instantaneous_max_wind_speed,
        warning_areas,
    })
}

fn wind_speed_query(kind: &str) -> TagQuery<'_> {
    TagQuery::tag(tags::WIND_SPEED)
        .with_attr(attrs::TYPE, kind)
        .with_attr(attrs::UNIT, attrs::UNIT_METERS_PER_SECOND)
}

/// Parse center position text such as `+35.2-140.1/`
pub fn parse_lat_lon(text: &str) -> Result<(f64, f64)> {
    let parsed = LAT_LON.captures(text).and_then(|caps| {
        let latitude = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let longitude = caps.get(3)?.as_str().parse::<f64>().ok()?;
        Some((latitude, longitude))
    });

    parsed.ok_or_else(|| {
        warn!(
            "Could not retrieve latitude and longitude. (latlon_text: {})",
            text
        );
        BulletinError::LatLonFormat {
            text: text.to_string(),
        }
    })
}
