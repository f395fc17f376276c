use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the forecast, immutable once constructed.
///
/// `max_temp >= min_temp` is not guaranteed by the upstream data and must not
/// be assumed by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Daily maximum, rounded to the nearest whole °C.
    pub max_temp: i32,
    /// Daily minimum, rounded to the nearest whole °C.
    pub min_temp: i32,
    /// WMO weather interpretation code (0-99 expected, others tolerated).
    pub weather_code: u16,
    /// Precipitation sum in mm, never negative.
    pub precipitation: f64,
}

/// A complete forecast: chronological days plus a display label for the
/// location. Replaced wholesale on every fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub days: Vec<ForecastDay>,
    pub location: String,
}

/// Observable state of one fetch cycle. Transitions are one-directional:
/// `Loading` then either `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Loading,
    Failed(String),
    Ready(ForecastResult),
}
