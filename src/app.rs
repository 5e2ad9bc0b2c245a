//! App Root Component
//!
//! Main application component: global state, mount-time fetches, tab bar.

use leptos::*;

use crate::api;
use crate::pages::{AddData, Dashboard, History};
use crate::state::global::{provide_app_state, AppState, Tab};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Fetch initial data on mount. The two reads are independent: each one
    // overwrites only its own state slice, in whichever order it completes.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        refresh_records(&state_for_effect);
        refresh_summary(&state_for_effect);
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 to-blue-50">
            <div class="container mx-auto p-6">
                // Header
                <div class="text-center mb-8">
                    <div class="text-5xl mb-2">"🌎"</div>
                    <h1 class="text-4xl font-bold text-gray-800 mb-2">"EcoTrack"</h1>
                    <p class="text-lg text-gray-600">
                        "Monitore e gerencie os impactos ambientais da sua organização"
                    </p>
                </div>

                <TabBar />

                // Active tab content
                <main class="mt-6">
                    {move || match state.active_tab.get() {
                        Tab::Dashboard => view! { <Dashboard /> }.into_view(),
                        Tab::AddData => view! { <AddData /> }.into_view(),
                        Tab::History => view! { <History /> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Tab selector for the three views
#[component]
fn TabBar() -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-1 bg-gray-200 rounded-lg p-1">
            {Tab::ALL.into_iter().map(|tab| view! {
                <TabButton tab />
            }).collect_view()}
        </div>
    }
}

/// One tab button
#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let active_tab = state.active_tab;
    let is_active = create_memo(move |_| active_tab.get() == tab);

    view! {
        <button
            on:click=move |_| active_tab.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-white text-gray-900 shadow", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

/// Re-fetch the record list, replacing it verbatim on success. Failures are
/// logged to the console and leave prior state untouched.
pub fn refresh_records(state: &AppState) {
    let records = state.records;
    spawn_local(async move {
        match api::fetch_records().await {
            Ok(data) => records.set(data),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao buscar dados: {}", e).into());
            }
        }
    });
}

/// Re-fetch the monthly summary. Same failure policy as [`refresh_records`].
pub fn refresh_summary(state: &AppState) {
    let summary = state.summary;
    spawn_local(async move {
        match api::fetch_summary().await {
            Ok(data) => summary.set(data),
            Err(e) => {
                web_sys::console::error_1(&format!("Erro ao buscar resumo: {}", e).into());
            }
        }
    });
}
