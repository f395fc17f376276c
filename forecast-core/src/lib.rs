//! Core library for the `forecast` widget.
//!
//! This crate defines:
//! - Shared domain models (per-day records, request state)
//! - The forecast provider abstraction, with a synthetic demo-data fallback
//! - The presenter driving the fetch → normalize → state cycle
//! - Weather-code classification and date labels for rendering
//!
//! It is used by `forecast-cli`, but can also be embedded by other front-ends.

pub mod classify;
pub mod config;
pub mod display;
pub mod model;
pub mod presenter;
pub mod provider;

pub use classify::{Conditions, SkyKind, classify};
pub use config::{Config, LocationConfig};
pub use display::relative_date_label;
pub use model::{ForecastDay, ForecastResult, RequestState};
pub use presenter::ForecastPresenter;
pub use provider::open_meteo::OpenMeteoProvider;
pub use provider::{FetchError, ForecastProvider, ForecastQuery};
