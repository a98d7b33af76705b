//! Application constants for the typhoon bulletin processor
//!
//! This module contains the bulletin tag vocabulary, attribute values,
//! timestamp formats and envelope defaults used throughout the processor.

// =============================================================================
// Bulletin Tag Vocabulary
// =============================================================================

/// Element names as they appear in JMA typhoon bulletins
pub mod tags {
    pub const HEAD: &str = "Head";
    pub const REPORT_DATE_TIME: &str = "ReportDateTime";
    pub const TARGET_DATE_TIME: &str = "TargetDateTime";
    pub const EVENT_ID: &str = "EventID";
    pub const SERIAL: &str = "Serial";

    pub const METEOROLOGICAL_INFOS: &str = "MeteorologicalInfos";
    pub const METEOROLOGICAL_INFO: &str = "MeteorologicalInfo";
    pub const DATE_TIME: &str = "DateTime";

    pub const TYPHOON_NAME_PART: &str = "TyphoonNamePart";
    pub const NAME: &str = "Name";
    pub const NAME_KANA: &str = "NameKana";
    pub const NUMBER: &str = "Number";
    pub const REMARK: &str = "Remark";

    pub const TYPHOON_CLASS: &str = "jmx_eb:TyphoonClass";
    pub const INTENSITY_CLASS: &str = "jmx_eb:IntensityClass";
    pub const AREA_CLASS: &str = "jmx_eb:AreaClass";

    pub const CENTER_PART: &str = "CenterPart";
    pub const COORDINATE: &str = "jmx_eb:Coordinate";
    pub const BASE_POINT: &str = "jmx_eb:BasePoint";
    pub const LOCATION: &str = "Location";
    pub const DIRECTION: &str = "jmx_eb:Direction";
    pub const SPEED: &str = "jmx_eb:Speed";
    pub const PRESSURE: &str = "jmx_eb:Pressure";

    pub const WIND_PART: &str = "WindPart";
    pub const WIND_SPEED: &str = "jmx_eb:WindSpeed";

    pub const WARNING_AREA_PART: &str = "WarningAreaPart";
    pub const PROBABILITY_CIRCLE: &str = "ProbabilityCircle";
    pub const AXIS: &str = "jmx_eb:Axis";
    pub const RADIUS: &str = "jmx_eb:Radius";
}

/// Attribute names and the attribute values the parser filters on
pub mod attrs {
    pub const TYPE: &str = "type";
    pub const UNIT: &str = "unit";
    pub const CONDITION: &str = "condition";

    pub const UNIT_KM: &str = "km";
    pub const UNIT_KM_PER_HOUR: &str = "km/h";
    pub const UNIT_METERS_PER_SECOND: &str = "m/s";

    /// Tropical disturbance classification
    pub const TYPHOON_CLASS_TYPE: &str = "熱帯擾乱種類";
    /// Intensity grade
    pub const INTENSITY_CLASS_TYPE: &str = "強さ階級";
    /// Size grade
    pub const AREA_CLASS_TYPE: &str = "大きさ階級";
    /// Center position in degrees
    pub const CENTER_POSITION_TYPE: &str = "中心位置（度）";
    /// Maximum sustained wind speed near the center
    pub const MAX_WIND_SPEED_TYPE: &str = "最大風速";
    /// Maximum instantaneous (gust) wind speed
    pub const MAX_GUST_SPEED_TYPE: &str = "最大瞬間風速";
}

/// Area `type` attribute values
pub mod area_types {
    pub const STRONG_WIND: &str = "強風域";
    pub const STORM: &str = "暴風域";
    pub const STORM_CAUTION: &str = "暴風警戒域";
    pub const FORECAST_CIRCLE: &str = "予報円";
}

// =============================================================================
// Coordinates and Timestamps
// =============================================================================

/// Sign-prefixed `lat lon` pair terminated by `/`, e.g. `+35.2-140.1/`
pub const LAT_LON_PATTERN: &str = r"^([+-]\d+(\.\d+)?)([+-]\d+(\.\d+)?)/$";

pub mod timestamps {
    /// Type A: ISO-8601 with explicit offset
    pub const TYPE_A_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
    /// Type B: compact UTC stamp
    pub const TYPE_B_FORMAT: &str = "%Y%m%d%H%M%S";
    /// Output form for both types
    pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
    /// Envelope bookkeeping stamps
    pub const ENVELOPE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f UTC";
    /// Length of the type B prefix on bulletin file names
    pub const FILE_NAME_STAMP_LEN: usize = 14;
}

// =============================================================================
// Envelope Defaults
// =============================================================================

pub mod envelope {
    pub const DEFAULT_ENV: &str = "local";
    pub const RISK_TYPE: &str = "typhoon_circle_forecast";
    pub const RISK_SOURCE: &str = "jma";
    pub const SCHEMA_VERSION: &str = "2022-11-01";
    pub const DEFAULT_BUCKET: &str = "resilire_local_jma_typhoon_circle_forecast_bucket";
    pub const BULLETIN_TITLE: &str = "台風解析・予報情報（５日予報）（Ｈ３０）";
}

// =============================================================================
// File Discovery and Output
// =============================================================================

pub const BULLETIN_FILE_PATTERN: &str = "*.xml";
pub const CONSOLIDATED_OUTPUT_DIR: &str = "json";
pub const DETAILED_OUTPUT_FILE: &str = "output.jsonl";
pub const LOG_TARGET: &str = "typhoon_processor";
