//! The weather lookup component: accepts a query, performs exactly one
//! network fetch, and produces a renderable state.
//!
//! State is an immutable [`UiState`] value replaced wholesale on every
//! transition. Each lookup carries a monotonically increasing sequence
//! number; a completion that is no longer the latest is dropped, so a
//! superseded request can never overwrite a newer result.

use crate::error::LookupError;
use crate::location::Locator;
use crate::model::{Query, WeatherSnapshot};
use crate::provider::WeatherProvider;
use crate::share;
use crate::state::{UiState, View};

/// Identifies one in-flight lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestToken(u64);

pub struct WeatherApp {
    provider: Box<dyn WeatherProvider>,
    locator: Box<dyn Locator>,
    share_footer: Option<String>,
    state: UiState,
    seq: u64,
}

impl WeatherApp {
    pub fn new(provider: Box<dyn WeatherProvider>, locator: Box<dyn Locator>) -> Self {
        Self {
            provider,
            locator,
            share_footer: None,
            state: UiState::default(),
            seq: 0,
        }
    }

    /// Line appended to shared summaries, from configuration.
    pub fn with_share_footer(mut self, footer: Option<String>) -> Self {
        self.share_footer = footer;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Look up weather for a place name. An empty or whitespace-only name
    /// performs no network call and leaves the state untouched.
    pub async fn submit_place_name(&mut self, name: &str) -> &UiState {
        let name = name.trim();
        if name.is_empty() {
            return &self.state;
        }

        let token = self.begin_lookup();
        let outcome = self
            .provider
            .current_weather(&Query::Place(name.to_string()))
            .await;
        self.finish_lookup(token, outcome);
        &self.state
    }

    /// Look up weather at the device's position. A denied or unavailable
    /// locator surfaces an error immediately, without a lookup.
    pub async fn submit_current_location(&mut self) -> &UiState {
        let coords = match self.locator.current_position().await {
            Ok(coords) => coords,
            Err(err) => {
                tracing::warn!(error = %err, "could not acquire position");
                let message = LookupError::from(err).to_string();
                self.state = self.state.with_view(View::Error(message));
                return &self.state;
            }
        };

        let token = self.begin_lookup();
        let outcome = self.provider.current_weather(&coords.into()).await;
        self.finish_lookup(token, outcome);
        &self.state
    }

    /// Build the share link for the current snapshot. Without a snapshot
    /// this sets the "nothing to share" error and returns `None`.
    pub fn share_snapshot(&mut self) -> Option<String> {
        match self.state.snapshot() {
            Some(snapshot) => Some(share::share_link(snapshot, self.share_footer.as_deref())),
            None => {
                self.state = self
                    .state
                    .with_view(View::Error(LookupError::NothingToShare.to_string()));
                None
            }
        }
    }

    /// Flip dark/light mode. Pure UI state, no network effect.
    pub fn toggle_theme(&mut self) -> &UiState {
        self.state = self.state.toggled_theme();
        &self.state
    }

    /// Enter loading and allocate the token that must still be current for
    /// the matching completion to apply.
    fn begin_lookup(&mut self) -> RequestToken {
        self.seq += 1;
        self.state = self.state.with_view(View::Loading);
        RequestToken(self.seq)
    }

    fn finish_lookup(
        &mut self,
        token: RequestToken,
        outcome: Result<WeatherSnapshot, LookupError>,
    ) {
        if token.0 != self.seq {
            tracing::debug!(stale = token.0, current = self.seq, "dropping superseded lookup");
            return;
        }

        self.state = match outcome {
            Ok(snapshot) => self.state.with_view(View::Showing(snapshot)),
            Err(err) => {
                tracing::debug!(error = %err, "lookup failed");
                self.state.with_view(View::Error(err.to_string()))
            }
        };
    }
}

impl std::fmt::Debug for WeatherApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApp")
            .field("state", &self.state)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
