//! Demo-data fallback used when the forecast provider is unreachable.

use chrono::{Duration, Local, NaiveDate};
use rand::RngExt;

use crate::model::{ForecastDay, ForecastResult};

use super::ForecastQuery;

/// Codes the demo generator draws from: clear, mainly clear, partly cloudy,
/// overcast, rain.
const DEMO_CODES: [u16; 5] = [0, 1, 2, 3, 61];

/// Source of uniform values in [0, 1). Injectable so tests can pin the
/// sequence the generator consumes.
pub trait RandomSource {
    fn unit(&mut self) -> f64;
}

/// Default source backed by the thread-local rng.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn unit(&mut self) -> f64 {
        rand::rng().random_range(0.0..1.0)
    }
}

/// Generates `query.days` consecutive days starting today, labelled as demo
/// data.
pub fn generate(query: &ForecastQuery, rng: &mut dyn RandomSource) -> ForecastResult {
    generate_from(query, Local::now().date_naive(), rng)
}

/// Draw order per day: max temp, min temp, weather code, precipitation gate,
/// then the precipitation value only when the gate passes.
pub fn generate_from(
    query: &ForecastQuery,
    start: NaiveDate,
    rng: &mut dyn RandomSource,
) -> ForecastResult {
    let days = (0..query.days)
        .map(|i| {
            let date = start + Duration::days(i64::from(i));
            let max_temp = (20.0 + rng.unit() * 10.0).round() as i32;
            let min_temp = (10.0 + rng.unit() * 8.0).round() as i32;
            let weather_code = DEMO_CODES[(rng.unit() * DEMO_CODES.len() as f64) as usize];
            // Floored rather than rounded so the value stays strictly
            // below 5.0 mm.
            let precipitation = if rng.unit() > 0.5 {
                (rng.unit() * 5.0 * 10.0).floor() / 10.0
            } else {
                0.0
            };

            ForecastDay {
                date,
                max_temp,
                min_temp,
                weather_code,
                precipitation,
            }
        })
        .collect();

    ForecastResult {
        days,
        location: format!("{} (Demo Data)", query.location_label),
    }
}
