//! Warning area and forecast circle extraction
//!
//! Each area block carries one or two `jmx_eb:Axis` entries. A single axis
//! describes a circle with no directional bias, so the short axis repeats
//! the long one. Two axes describe an ellipse-like area read independently.

use super::fields::{required, required_u32, zero_if_empty};
use crate::constants::{attrs, tags};
use crate::document::{Element, TagQuery};
use crate::error::{BulletinError, Result};
use crate::models::{Area, AreaType};

/// Direction and radius of one axis
#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    direction: String,
    radius: u32,
}

/// Extract one `WarningAreaPart` / `ProbabilityCircle` block
pub fn parse_area(part: &Element) -> Result<Area> {
    let type_attr = part.attr(attrs::TYPE).ok_or_else(|| {
        BulletinError::malformed(format!("{}[type]", part.name()), "missing area type")
    })?;
    let area_type = AreaType::from_attr(type_attr).ok_or_else(|| {
        BulletinError::malformed(
            format!("{}[type]", part.name()),
            format!("unknown area type '{}'", type_attr),
        )
    })?;

    let wind_speed = match area_type {
        AreaType::ForecastCircle => 0,
        _ => required_u32(
            part,
            &TagQuery::tag(tags::WIND_SPEED).with_attr(attrs::UNIT, attrs::UNIT_METERS_PER_SECOND),
        )?,
    };

    let axes = part.find_all(&TagQuery::tag(tags::AXIS));
    let (long, short) = match axes.as_slice() {
        [only] => {
            let long = parse_axis(only)?;
            let short = long.clone();
            // A single axis must be omnidirectional
            if !short.direction.is_empty() {
                return Err(BulletinError::ShortAxisNotEmpty {
                    direction: short.direction,
                });
            }
            (long, short)
        }
        [first, second] => (parse_axis(first)?, parse_axis(second)?),
        other => {
            return Err(BulletinError::AxisCount {
                area_type: area_type.to_string(),
                found: other.len(),
            });
        }
    };

    Ok(Area {
        warning_area_type: area_type,
        wind_speed,
        circle_long_direction: long.direction,
        circle_long_radius: long.radius,
        circle_short_direction: short.direction,
        circle_short_radius: short.radius,
    })
}

fn parse_axis(axis: &Element) -> Result<Axis> {
    let direction = required(axis, &TagQuery::tag(tags::DIRECTION))?.text();
    let radius_text = required(
        axis,
        &TagQuery::tag(tags::RADIUS).with_attr(attrs::UNIT, attrs::UNIT_KM),
    )?
    .text();
    let radius = zero_if_empty(&radius_text, "jmx_eb:Axis/jmx_eb:Radius[unit=km]")?;
    Ok(Axis { direction, radius })
}
