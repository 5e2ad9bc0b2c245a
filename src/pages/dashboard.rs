//! Dashboard Page
//!
//! Summary cards per category plus the bar and pie charts.

use leptos::*;

use crate::components::{BarChart, CategoryCard, PieChart};
use crate::state::global::AppState;

/// Dashboard tab: category cards and charts over the monthly summary
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="space-y-6">
            // One card per category present in the period, backend order
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <For
                    each=move || state.summary.get()
                    key=|entry| entry.data_type.clone()
                    children=move |entry| view! { <CategoryCard entry /> }
                />
            </div>

            // Charts
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold">"Impactos por Categoria"</h2>
                    <p class="text-sm text-gray-500 mb-4">
                        "Distribuição dos impactos ambientais (últimos 30 dias)"
                    </p>
                    <BarChart />
                </section>

                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold">"Distribuição de Impactos"</h2>
                    <p class="text-sm text-gray-500 mb-4">
                        "Proporção relativa dos diferentes tipos de impacto"
                    </p>
                    <PieChart />
                </section>
            </div>
        </div>
    }
}
