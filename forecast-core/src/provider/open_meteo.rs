use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{ForecastDay, ForecastResult};

use super::{FetchError, ForecastProvider, ForecastQuery};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode";

/// Open-Meteo daily forecast client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    daily: OmDaily,
}

/// Parallel arrays, one entry per field per day, index-aligned.
#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
    weathercode: Vec<u16>,
}

impl OmDaily {
    /// Zips the parallel arrays into per-day records, rejecting any shape the
    /// original widget would have silently mis-indexed.
    fn into_days(self) -> Result<Vec<ForecastDay>, FetchError> {
        let n = self.time.len();
        let aligned = self.temperature_2m_max.len() == n
            && self.temperature_2m_min.len() == n
            && self.precipitation_sum.len() == n
            && self.weathercode.len() == n;
        if !aligned {
            return Err(FetchError::Malformed(format!(
                "daily arrays are not index-aligned ({n} dates, {} max, {} min, {} precipitation, {} codes)",
                self.temperature_2m_max.len(),
                self.temperature_2m_min.len(),
                self.precipitation_sum.len(),
                self.weathercode.len(),
            )));
        }

        let mut days = Vec::with_capacity(n);
        for i in 0..n {
            let precipitation = self.precipitation_sum[i];
            if precipitation < 0.0 {
                return Err(FetchError::Malformed(format!(
                    "negative precipitation sum {precipitation} on {}",
                    self.time[i]
                )));
            }

            days.push(ForecastDay {
                date: self.time[i],
                max_temp: self.temperature_2m_max[i].round() as i32,
                min_temp: self.temperature_2m_min[i].round() as i32,
                weather_code: self.weathercode[i],
                precipitation,
            });
        }

        Ok(days)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResult, FetchError> {
        let url = format!("{}/v1/forecast", self.base_url);
        debug!(%url, days = query.days, "requesting daily forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", query.latitude.to_string()),
                ("longitude", query.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", query.timezone.clone()),
                ("forecast_days", query.days.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let days = parsed.daily.into_days()?;
        if days.len() != query.days as usize {
            return Err(FetchError::Malformed(format!(
                "expected {} forecast days, got {}",
                query.days,
                days.len()
            )));
        }

        Ok(ForecastResult {
            days,
            location: query.location_label.clone(),
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // The cut must land on a char boundary; the body is remote input and can
    // put a multi-byte character across the limit.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_body() -> serde_json::Value {
        json!({
            "daily": {
                "time": ["2025-06-02", "2025-06-03", "2025-06-04", "2025-06-05", "2025-06-06"],
                "temperature_2m_max": [21.4, 22.5, 19.6, 24.0, 25.5],
                "temperature_2m_min": [11.2, 12.5, 9.4, 13.0, 14.5],
                "precipitation_sum": [0.0, 1.2, 0.0, 3.4, 0.0],
                "weathercode": [0, 61, 3, 95, 2]
            }
        })
    }

    #[tokio::test]
    async fn maps_parallel_arrays_into_days() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("forecast_days", "5"))
            .and(query_param("timezone", "America/New_York"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri());
        let result = provider.fetch(&ForecastQuery::default()).await.unwrap();

        assert_eq!(result.location, "New York, NY");
        assert_eq!(result.days.len(), 5);
        assert!(result.days.windows(2).all(|w| w[0].date < w[1].date));

        // Half-away-from-zero rounding.
        assert_eq!(result.days[0].max_temp, 21);
        assert_eq!(result.days[1].max_temp, 23);
        assert_eq!(result.days[2].max_temp, 20);
        assert_eq!(result.days[2].min_temp, 9);

        assert_eq!(result.days[3].weather_code, 95);
        assert_eq!(result.days[1].precipitation, 1.2);
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri());
        let err = provider.fetch(&ForecastQuery::default()).await.unwrap_err();

        assert!(matches!(&err, FetchError::Status { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn misaligned_arrays_are_rejected() {
        let mut body = sample_body();
        body["daily"]["weathercode"] = json!([0, 61, 3]);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri());
        let err = provider.fetch(&ForecastQuery::default()).await.unwrap_err();

        assert!(matches!(&err, FetchError::Malformed(_)));
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn short_response_is_rejected() {
        let body = json!({
            "daily": {
                "time": ["2025-06-02"],
                "temperature_2m_max": [21.4],
                "temperature_2m_min": [11.2],
                "precipitation_sum": [0.0],
                "weathercode": [0]
            }
        });

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri());
        let err = provider.fetch(&ForecastQuery::default()).await.unwrap_err();

        assert!(matches!(err, FetchError::Malformed(msg) if msg.contains("expected 5")));
    }

    #[test]
    fn truncates_long_error_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() <= 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncates_multibyte_bodies_on_a_char_boundary() {
        // 199 ASCII bytes, then a two-byte character straddling index 200.
        let body = format!("{}{}", "x".repeat(199), "é".repeat(20));
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(199)));
    }

    #[tokio::test]
    async fn multibyte_error_body_still_falls_through_as_status() {
        let body = format!("{}{}", "x".repeat(199), "é".repeat(20));

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string(body))
            .mount(&server)
            .await;

        let provider = OpenMeteoProvider::with_base_url(server.uri());
        let err = provider.fetch(&ForecastQuery::default()).await.unwrap_err();

        assert!(matches!(&err, FetchError::Status { .. }));
        assert!(err.is_recoverable());
    }
}
