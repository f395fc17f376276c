use crate::model::ForecastResult;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;
pub mod synthetic;

/// What to ask the provider for. Defaults match the original widget:
/// New York City, five days, America/New_York.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Display label carried through to `ForecastResult::location`.
    pub location_label: String,
    pub timezone: String,
    pub days: u8,
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.0060,
            location_label: "New York, NY".to_string(),
            timezone: "America/New_York".to_string(),
            days: 5,
        }
    }
}

/// Provider-side failures, split by how the presenter reacts to them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to reach the forecast provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed forecast response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Network and HTTP-status failures are absorbed by the demo-data
    /// fallback; anything else surfaces to the user as a Failed state.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status { .. })
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResult, FetchError>;
}
