use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::{CityQuery, WeatherReport};

use super::{LookupError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeatherMap current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used to run against a mock
    /// server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &CityQuery) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(city = %city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            warn!(city = %city, "city not found upstream");
            return Err(LookupError::NotFound);
        }

        if !status.is_success() {
            let detail = error_body_message(&body)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            warn!(city = %city, %status, "current weather request failed");
            return Err(LookupError::RequestFailed(detail));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Parse("weather conditions list is empty".to_string()))?;

        Ok(WeatherReport {
            city: parsed.name,
            country: parsed.sys.country,
            icon: condition.icon,
            description: condition.description,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
        })
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &CityQuery) -> Result<WeatherReport, LookupError> {
        self.fetch_current(city).await
    }
}

/// Pull the human-readable message out of an upstream error body
/// (`{"cod":"500","message":"..."}`). Returns None when the body is absent
/// or not in that shape.
fn error_body_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
}
