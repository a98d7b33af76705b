//! Core data structures for typhoon bulletin processing.
//!
//! Defines the extracted bulletin, its per-time-point observations and
//! their warning/storm/forecast-circle areas, plus the processing
//! statistics reported by the driver.

use crate::constants::area_types;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One parsed forecast bulletin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bulletin {
    pub summary: BulletinSummary,
    pub observations: Vec<Observation>,
}

/// Header and typhoon identity fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletinSummary {
    pub title: String,
    pub report_timestamp: String,
    pub target_timestamp: String,
    pub typhoon_name: String,
    pub typhoon_name_kana: String,
    pub typhoon_number: String,
    pub remark: String,
    pub case_id: String,
    pub report_no: u32,
}

/// Where the center position was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterKind {
    /// `jmx_eb:Coordinate`: analysis or short-range estimate
    Coordinate,
    /// `jmx_eb:BasePoint`: forecast circle center
    BasePoint,
}

/// Typhoon state at one time point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub target_timestamp: String,
    pub target_timestamp_type: String,
    pub typhoon_class: String,
    pub typhoon_strength: String,
    pub typhoon_size: String,
    pub latitude: f64,
    pub longitude: f64,
    pub point_accuracy: String,
    pub center_kind: CenterKind,
    pub location: String,
    pub direction: String,
    /// km/h
    pub velocity: u32,
    /// hPa
    pub central_pressure: u32,
    /// m/s
    pub max_wind_speed_near_the_center: u32,
    /// m/s
    pub instantaneous_max_wind_speed: u32,
    pub warning_areas: Vec<Area>,
}

impl Observation {
    /// Areas of the given kind, in document order
    pub fn areas_of(&self, kind: AreaType) -> impl Iterator<Item = &Area> {
        self.warning_areas
            .iter()
            .filter(move |area| area.warning_area_type == kind)
    }
}

/// Area kinds, serialized with the bulletin's own vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    #[serde(rename = "強風域")]
    StrongWind,
    #[serde(rename = "暴風域")]
    Storm,
    #[serde(rename = "暴風警戒域")]
    StormCaution,
    #[serde(rename = "予報円")]
    ForecastCircle,
}

impl AreaType {
    /// Map an area block's `type` attribute
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            area_types::STRONG_WIND => Some(AreaType::StrongWind),
            area_types::STORM => Some(AreaType::Storm),
            area_types::STORM_CAUTION => Some(AreaType::StormCaution),
            area_types::FORECAST_CIRCLE => Some(AreaType::ForecastCircle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::StrongWind => area_types::STRONG_WIND,
            AreaType::Storm => area_types::STORM,
            AreaType::StormCaution => area_types::STORM_CAUTION,
            AreaType::ForecastCircle => area_types::FORECAST_CIRCLE,
        }
    }

    /// Storm and storm-caution areas share an output table
    pub fn is_storm(&self) -> bool {
        matches!(self, AreaType::Storm | AreaType::StormCaution)
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning, storm or forecast-circle geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub warning_area_type: AreaType,
    /// m/s, always 0 for forecast circles
    pub wind_speed: u32,
    pub circle_long_direction: String,
    /// km
    pub circle_long_radius: u32,
    pub circle_short_direction: String,
    /// km
    pub circle_short_radius: u32,
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub observations: usize,
    pub areas: usize,
    pub output_paths: Vec<PathBuf>,
    pub processing_time_ms: u128,
}
