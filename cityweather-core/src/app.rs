use tracing::{debug, warn};

use crate::{
    model::{CityQuery, WeatherReport},
    provider::{LookupError, WeatherProvider},
    render::{self, WeatherDisplay},
    state::AppViewState,
    store::{LAST_CITY_KEY, PreferenceStore},
};

/// The application controller: wires user input and startup restore to the
/// weather provider, the view state machine, and the display.
///
/// All mutable state lives here; the provider, store, and display are
/// injected capabilities so tests can substitute fakes.
pub struct App<P, S, D> {
    provider: P,
    store: S,
    display: D,
    state: AppViewState,
    /// Bumped on every lookup; outcomes from older lookups are discarded
    /// so a stale response can never clobber a newer submission.
    generation: u64,
}

impl<P, S, D> App<P, S, D>
where
    P: WeatherProvider,
    S: PreferenceStore,
    D: WeatherDisplay,
{
    pub fn new(provider: P, store: S, display: D) -> Self {
        Self {
            provider,
            store,
            display,
            state: AppViewState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &AppViewState {
        &self.state
    }

    fn enter(&mut self, next: AppViewState) {
        debug!(from = self.state.name(), to = next.name(), "view transition");
        self.state = next;
        self.display.show(&render::project(&self.state));
    }

    /// Restore the last searched city, look it up immediately, and return
    /// it so the caller can pre-populate the input field. Does nothing
    /// when no city was remembered.
    pub async fn startup(&mut self) -> Option<String> {
        let last = self
            .store
            .get(LAST_CITY_KEY)
            .filter(|city| !city.trim().is_empty());

        if let Some(city) = &last {
            self.submit(city).await;
        }

        last
    }

    /// Handle one submission of raw user input. Empty or whitespace-only
    /// input goes straight to the Error view without touching the network
    /// or the preference store.
    pub async fn submit(&mut self, raw_input: &str) {
        match CityQuery::new(raw_input) {
            Ok(city) => self.lookup(city).await,
            Err(err) => self.enter(AppViewState::Error(err.display_message())),
        }
    }

    /// Run one full lookup cycle for a validated city.
    ///
    /// The city is remembered before the outcome is known, matching the
    /// last-attempted-city semantics of the preference.
    pub async fn lookup(&mut self, city: CityQuery) {
        if let Err(err) = self.store.set(LAST_CITY_KEY, city.as_str()) {
            warn!("failed to remember last city: {err:#}");
        }

        self.generation += 1;
        let generation = self.generation;

        self.enter(AppViewState::Loading);

        let outcome = self.provider.current_weather(&city).await;
        self.apply_outcome(generation, outcome);
    }

    /// Apply a lookup outcome unless a newer lookup has been issued since
    /// it was started.
    fn apply_outcome(&mut self, generation: u64, outcome: Result<WeatherReport, LookupError>) {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "discarding stale lookup outcome"
            );
            return;
        }

        match outcome {
            Ok(report) => self.enter(AppViewState::Result(report)),
            Err(err) => self.enter(AppViewState::Error(err.display_message())),
        }
    }
}
