//! Chart Panel Component
//!
//! Fetches the technical-analysis payload once on mount, fills the
//! indicator selector and draws the selected series on a canvas.

use leptos::*;

use crate::api;
use crate::chart::{self, canvas};
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Technical-analysis chart with indicator selector
#[component]
pub fn ChartPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let indicators = state.indicators;
    let selected = state.selected;
    let loading = state.loading;
    let series = state.series;

    // Single fetch on mount. A failure is logged and toasted; the chart
    // simply stays absent, there is no retry.
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_indicator_frames().await {
                Ok(payload) => {
                    let names = chart::indicator_names(&payload);
                    state.payload.set(Some(payload));
                    state.indicators.set(names.clone());

                    if let Some(first) = names.first() {
                        state.select_indicator(first);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch indicator data: {}", e).into(),
                    );
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    // Redraw whenever the series changes. The same canvas is reused; only
    // its pixels are replaced.
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            canvas::draw_series(&canvas, &series);
        }
    });

    let state_for_select = state;
    let on_select = move |ev: ev::Event| {
        state_for_select.select_indicator(&event_target_value(&ev));
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Technical Analysis"</h2>

                <select
                    class="bg-gray-700 text-gray-200 rounded-lg px-3 py-2 text-sm"
                    on:change=on_select
                >
                    {move || {
                        let current = selected.get();
                        indicators.get()
                            .into_iter()
                            .map(|name| {
                                let is_selected = current.as_deref() == Some(name.as_str());
                                view! {
                                    <option value=name.clone() selected=is_selected>
                                        {name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <canvas
                            node_ref=canvas_ref
                            width="800"
                            height="400"
                            class="w-full h-64 md:h-96 rounded-lg"
                        />
                    }
                    .into_view()
                }
            }}
        </section>
    }
}
