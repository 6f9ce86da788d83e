//! App Root Component
//!
//! Main application layout with the global state provider.

use leptos::*;

use crate::components::{ChartPanel, Clock, Navbar, Toast};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Navbar />

            <main class="flex-1 container mx-auto px-4 py-8">
                // Server clock
                <section id="overview" class="bg-gray-800 rounded-xl p-6 mb-8">
                    <h2 class="text-xl font-semibold mb-4">"Server Time"</h2>
                    <Clock />
                </section>

                // Indicator chart
                <div id="analysis">
                    <ChartPanel />
                </div>
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
