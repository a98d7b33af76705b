//! Output record shapes.
//!
//! The same bulletin can be emitted in two framings:
//! - consolidated: a bare array of observations with their areas nested
//! - detailed: the envelope and summary plus flat per-area rows split into
//!   strong-wind, storm and probability-circle tables, each row repeating
//!   its observation's fields

use crate::envelope::Envelope;
use crate::models::{Area, AreaType, Bulletin, BulletinSummary, CenterKind, Observation};
use serde::{Deserialize, Serialize};

/// Output framing selector
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    /// One pretty-printed JSON array of observations per bulletin
    #[default]
    Consolidated,
    /// One JSON-Lines file, one flattened record per bulletin
    Detailed,
}

/// Envelope plus flattened area tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedRecord {
    #[serde(flatten)]
    pub meta: Envelope,
    pub summary: BulletinSummary,
    pub strong_wind_areas: Vec<WarningAreaRow>,
    pub storm_areas: Vec<WarningAreaRow>,
    pub probability_circles: Vec<ProbabilityCircleRow>,
}

impl DetailedRecord {
    pub fn new(meta: Envelope, bulletin: &Bulletin) -> Self {
        let mut strong_wind_areas = Vec::new();
        let mut storm_areas = Vec::new();
        let mut probability_circles = Vec::new();

        for observation in &bulletin.observations {
            if observation.center_kind == CenterKind::Coordinate {
                probability_circles.push(ProbabilityCircleRow::center_only(observation));
            }

            for area in &observation.warning_areas {
                match area.warning_area_type {
                    AreaType::ForecastCircle => {
                        probability_circles.push(ProbabilityCircleRow::new(observation, area));
                    }
                    AreaType::StrongWind => {
                        strong_wind_areas.push(WarningAreaRow::new(observation, area));
                    }
                    AreaType::Storm | AreaType::StormCaution => {
                        storm_areas.push(WarningAreaRow::new(observation, area));
                    }
                }
            }
        }

        Self {
            meta,
            summary: bulletin.summary.clone(),
            strong_wind_areas,
            storm_areas,
            probability_circles,
        }
    }

    pub fn row_count(&self) -> usize {
        self.strong_wind_areas.len() + self.storm_areas.len() + self.probability_circles.len()
    }
}

/// Strong-wind or storm area joined with its observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningAreaRow {
    pub target_timestamp: String,
    pub target_timestamp_type: String,
    pub typhoon_class: String,
    pub typhoon_strength: String,
    pub typhoon_size: String,
    pub latitude: f64,
    pub longitude: f64,
    pub point_accuracy: String,
    pub location: String,
    pub direction: String,
    pub velocity: u32,
    pub central_pressure: u32,
    pub max_wind_speed_near_the_center: u32,
    pub instantaneous_max_wind_speed: u32,
    pub warning_area_type: AreaType,
    pub wind_speed: u32,
    pub circle_long_direction: String,
    pub circle_long_radius: u32,
    pub circle_short_direction: String,
    pub circle_short_radius: u32,
}

impl WarningAreaRow {
    pub fn new(observation: &Observation, area: &Area) -> Self {
        Self {
            target_timestamp: observation.target_timestamp.clone(),
            target_timestamp_type: observation.target_timestamp_type.clone(),
            typhoon_class: observation.typhoon_class.clone(),
            typhoon_strength: observation.typhoon_strength.clone(),
            typhoon_size: observation.typhoon_size.clone(),
            latitude: observation.latitude,
            longitude: observation.longitude,
            point_accuracy: observation.point_accuracy.clone(),
            location: observation.location.clone(),
            direction: observation.direction.clone(),
            velocity: observation.velocity,
            central_pressure: observation.central_pressure,
            max_wind_speed_near_the_center: observation.max_wind_speed_near_the_center,
            instantaneous_max_wind_speed: observation.instantaneous_max_wind_speed,
            warning_area_type: area.warning_area_type,
            wind_speed: area.wind_speed,
            circle_long_direction: area.circle_long_direction.clone(),
            circle_long_radius: area.circle_long_radius,
            circle_short_direction: area.circle_short_direction.clone(),
            circle_short_radius: area.circle_short_radius,
        }
    }
}

/// Forecast circle (or analysed center) joined with its observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityCircleRow {
    pub target_timestamp: String,
    pub target_timestamp_type: String,
    pub typhoon_class: String,
    pub typhoon_strength: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub direction: String,
    pub velocity: u32,
    pub central_pressure: u32,
    pub max_wind_speed_near_the_center: u32,
    pub instantaneous_max_wind_speed: u32,
    pub circle_long_direction: String,
    pub circle_long_radius: u32,
    pub circle_short_direction: String,
    pub circle_short_radius: u32,
}

impl ProbabilityCircleRow {
    pub fn new(observation: &Observation, area: &Area) -> Self {
        Self {
            circle_long_direction: area.circle_long_direction.clone(),
            circle_long_radius: area.circle_long_radius,
            circle_short_direction: area.circle_short_direction.clone(),
            circle_short_radius: area.circle_short_radius,
            ..Self::center_only(observation)
        }
    }

    /// Zero-radius row marking an analysed center position
    pub fn center_only(observation: &Observation) -> Self {
        Self {
            target_timestamp: observation.target_timestamp.clone(),
            target_timestamp_type: observation.target_timestamp_type.clone(),
            typhoon_class: observation.typhoon_class.clone(),
            typhoon_strength: observation.typhoon_strength.clone(),
            latitude: observation.latitude,
            longitude: observation.longitude,
            location: observation.location.clone(),
            direction: observation.direction.clone(),
            velocity: observation.velocity,
            central_pressure: observation.central_pressure,
            max_wind_speed_near_the_center: observation.max_wind_speed_near_the_center,
            instantaneous_max_wind_speed: observation.instantaneous_max_wind_speed,
            circle_long_direction: String::new(),
            circle_long_radius: 0,
            circle_short_direction: String::new(),
            circle_short_radius: 0,
        }
    }
}
