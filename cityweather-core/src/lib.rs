//! Core library for the `cityweather` lookup app.
//!
//! This crate defines:
//! - The domain model (validated city queries, weather reports)
//! - The view state machine and application controller
//! - The OpenWeatherMap client
//! - Rendering of reports into display slots
//! - Configuration & last-city persistence
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries
//! or front ends.

pub mod app;
pub mod config;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;
pub mod store;

pub use app::App;
pub use config::Config;
pub use model::{CityQuery, WeatherReport};
pub use provider::{LookupError, WeatherProvider, openweather::OpenWeatherClient};
pub use render::{RenderedWeather, ViewFrame, WeatherDisplay};
pub use state::AppViewState;
pub use store::{FilePreferenceStore, LAST_CITY_KEY, MemoryPreferenceStore, PreferenceStore};
