use crate::model::WeatherSnapshot;

/// What the result area currently shows. One variant at a time, so loading
/// can never coexist with an error or a stale result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Idle,
    Loading,
    Error(String),
    Showing(WeatherSnapshot),
}

/// Whole UI state. Immutable value, replaced wholesale on every transition;
/// the theme flag is orthogonal to the result view and survives all of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub view: View,
    pub dark_mode: bool,
}

impl UiState {
    /// New state with the given view and the current theme.
    pub fn with_view(&self, view: View) -> Self {
        Self {
            view,
            dark_mode: self.dark_mode,
        }
    }

    /// New state with the theme flipped and the view untouched.
    pub fn toggled_theme(&self) -> Self {
        Self {
            view: self.view.clone(),
            dark_mode: !self.dark_mode,
        }
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.view {
            View::Showing(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Loading)
    }
}
