use crate::model::WeatherReport;

/// The single active visual mode of the application.
///
/// Exactly one variant is active at any time; the controller replaces the
/// whole state on every transition, so two regions can never be visible
/// at once. `Idle` is the initial state before any lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppViewState {
    #[default]
    Idle,
    Loading,
    Result(WeatherReport),
    Error(String),
}

impl AppViewState {
    pub fn name(&self) -> &'static str {
        match self {
            AppViewState::Idle => "idle",
            AppViewState::Loading => "loading",
            AppViewState::Result(_) => "result",
            AppViewState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AppViewState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle() {
        assert_eq!(AppViewState::default(), AppViewState::Idle);
    }

    #[test]
    fn state_names() {
        assert_eq!(AppViewState::Idle.name(), "idle");
        assert_eq!(AppViewState::Loading.name(), "loading");
        assert_eq!(AppViewState::Error("boom".into()).name(), "error");
        assert!(AppViewState::Loading.is_loading());
        assert!(!AppViewState::Idle.is_loading());
    }
}
