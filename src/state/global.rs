//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::chart::{self, IndicatorPayload, IndicatorSeries};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Fetched technical-analysis payload, kept for re-extraction when the
    /// selection changes
    pub payload: RwSignal<Option<IndicatorPayload>>,
    /// Indicators offered by the selector
    pub indicators: RwSignal<Vec<String>>,
    /// Currently selected indicator
    pub selected: RwSignal<Option<String>>,
    /// Series currently drawn on the canvas
    pub series: RwSignal<IndicatorSeries>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        payload: create_rw_signal(None),
        indicators: create_rw_signal(Vec::new()),
        selected: create_rw_signal(None),
        series: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Select an indicator and rebuild the drawn series in place. The chart
    /// redraws through the series signal; the canvas is untouched.
    pub fn select_indicator(&self, name: &str) {
        self.selected.set(Some(name.to_string()));
        if let Some(payload) = self.payload.get_untracked() {
            self.series.set(chart::extract(&payload, name));
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
