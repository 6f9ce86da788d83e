//! Clock Component
//!
//! Live server-time display. The seed is read once from the host page's
//! `#server-time` element; from then on the clock advances itself, one
//! logical second per interval, and never re-reads any clock.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::clock::{self, ambient::BrowserAmbient, ClockError, RunningClock};
use crate::state::global::GlobalState;

/// Live clock display: time, date and timezone
#[component]
pub fn Clock() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let time = create_rw_signal("--:--:--".to_string());
    let date = create_rw_signal(String::new());
    let zone = create_rw_signal(String::new());
    let failed = create_rw_signal(false);

    match read_seed() {
        Ok(seed) => {
            // Tick once right away, then every second for the page lifetime.
            let current = Rc::new(Cell::new(seed));
            render_tick(&current, time, date, zone);

            let current_for_interval = Rc::clone(&current);
            gloo_timers::callback::Interval::new(1000, move || {
                render_tick(&current_for_interval, time, date, zone);
            })
            .forget();
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Clock disabled: {}", e).into());
            failed.set(true);
            state.show_error("Server time is unavailable");
        }
    }

    view! {
        <div class="flex items-baseline space-x-3 font-mono">
            <span class="text-3xl font-bold">{move || time.get()}</span>
            <span class="text-gray-400">{move || date.get()}</span>
            <span class="text-gray-500 text-sm">{move || zone.get()}</span>

            {move || {
                failed.get().then(|| view! {
                    <span class="text-red-400 text-sm font-sans">
                        "server time unavailable"
                    </span>
                })
            }}
        </div>
    }
}

/// Render one frame into the display signals and advance the running clock.
fn render_tick(
    current: &Rc<Cell<RunningClock>>,
    time: RwSignal<String>,
    date: RwSignal<String>,
    zone: RwSignal<String>,
) {
    let (frame, next) = clock::tick(current.get(), &BrowserAmbient);
    time.set(frame.time);
    date.set(frame.date);
    zone.set(frame.zone);
    current.set(next);
}

/// Read the ISO-8601 seed the server rendered into the host page.
fn read_seed() -> Result<RunningClock, ClockError> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("server-time"))
        .and_then(|el| el.text_content())
        .ok_or(ClockError::MissingSeed)?;

    RunningClock::from_iso8601(&text)
}
