use chrono::{Local, NaiveDate};

use crate::{model::WeatherReport, state::AppViewState};

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// The display slots for one weather result, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWeather {
    /// "City, Country" label, e.g. "Kyiv, UA".
    pub location: String,
    /// Full local date, e.g. "Thursday, August 28, 2026".
    pub date: String,
    pub icon_url: String,
    pub temperature: String,
    pub description: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
}

/// What the display is asked to show for the current view state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewFrame {
    Idle,
    Loading,
    Weather(RenderedWeather),
    Error(String),
}

/// The display capability driven by the controller. The CLI implements it
/// against the terminal; tests record the frames they are shown.
pub trait WeatherDisplay {
    fn show(&mut self, frame: &ViewFrame);
}

/// Project the current view state onto a display frame. Result states are
/// rendered with today's local date.
pub fn project(state: &AppViewState) -> ViewFrame {
    match state {
        AppViewState::Idle => ViewFrame::Idle,
        AppViewState::Loading => ViewFrame::Loading,
        AppViewState::Result(report) => ViewFrame::Weather(render(report)),
        AppViewState::Error(message) => ViewFrame::Error(message.clone()),
    }
}

/// Format a report for display, dated with the local clock.
pub fn render(report: &WeatherReport) -> RenderedWeather {
    render_on(report, Local::now().date_naive())
}

/// Format a report for display with an explicit date. Split out from
/// [`render`] so tests can pin the date.
pub fn render_on(report: &WeatherReport, date: NaiveDate) -> RenderedWeather {
    RenderedWeather {
        location: format!("{}, {}", report.city, report.country),
        date: date.format("%A, %B %-d, %Y").to_string(),
        icon_url: format!("{ICON_URL_BASE}/{}@2x.png", report.icon),
        // cast after rounding so -0.0 prints as "0"
        temperature: format!("{}°C", report.temperature_c.round() as i64),
        description: report.description.clone(),
        feels_like: format!("{}°C", report.feels_like_c.round() as i64),
        humidity: format!("{}%", report.humidity_pct),
        wind_speed: format!("{} m/s", report.wind_speed_mps),
        pressure: format!("{} hPa", report.pressure_hpa),
    }
}
