//! Navbar Component
//!
//! Top navigation bar with scroll-aware pinning, a mobile menu toggle and a
//! scroll-to-top button. All class decisions come from the pure transitions
//! in [`crate::nav`]; this component only feeds them browser events.

use leptos::*;

use crate::nav::{self, NavState};

const LINK_CLASS: &str =
    "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors";

/// Navigation header with scroll-to-top button
#[component]
pub fn Navbar() -> impl IntoView {
    let state = create_rw_signal(NavState::default());

    // Derived class state, written by the handlers below.
    let bar_pinned = create_rw_signal(true);
    let to_top_anchored = create_rw_signal(false);
    let to_top_hidden = create_rw_signal(true);
    let menu_shown = create_rw_signal(false);

    let _scroll_listener = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        let (next, effect) = nav::on_scroll(state.get_untracked(), scroll_y);

        state.set(next);
        bar_pinned.set(effect.bar_pinned);
        to_top_anchored.set(effect.to_top_anchored);
        to_top_hidden.set(effect.to_top_hidden);
    });

    let on_toggle = move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        let (next, effect) = nav::on_toggle(state.get_untracked(), scroll_y);

        state.set(next);
        menu_shown.set(effect.open);
        to_top_hidden.set(effect.to_top_hidden);
    };

    let on_link = move |_| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let (next, effect) = nav::on_link_click(state.get_untracked(), width);

        state.set(next);
        if effect.close_menu {
            menu_shown.set(false);
        }
    };

    let scroll_to_top = move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    view! {
        <nav class=move || {
            let base = "navbar bg-gray-800 border-b border-gray-700";
            if bar_pinned.get() {
                format!("{} fixed-top", base)
            } else {
                base.to_string()
            }
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🤖"</span>
                        <span class="text-xl font-bold text-white">"Botboard"</span>
                    </a>

                    // Mobile menu toggler
                    <button
                        class="navbar-toggler md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        on:click=on_toggle
                    >
                        "☰"
                    </button>

                    // Navigation links
                    <div class=move || {
                        let base = "navbar-collapse md:flex items-center space-x-1";
                        if menu_shown.get() {
                            format!("{} show", base)
                        } else {
                            base.to_string()
                        }
                    }>
                        <a href="#overview" class=LINK_CLASS on:click=on_link>"Overview"</a>
                        <a href="#analysis" class=LINK_CLASS on:click=on_link>"Analysis"</a>
                        <a href="#trades" class=LINK_CLASS on:click=on_link>"Trades"</a>
                    </div>
                </div>
            </div>
        </nav>

        // Scroll-to-top button
        <button
            class=move || {
                let mut classes = String::from(
                    "scroll-top-btn bg-gray-700 hover:bg-gray-600 text-white rounded-full w-10 h-10",
                );
                if to_top_anchored.get() {
                    classes.push_str(" fixed-bottom");
                }
                if to_top_hidden.get() {
                    classes.push_str(" d-none");
                }
                classes
            }
            on:click=scroll_to_top
        >
            "↑"
        </button>
    }
}
