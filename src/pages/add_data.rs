//! Add Data Page
//!
//! Data-entry tab wrapping the record form.

use leptos::*;

use crate::components::EntryForm;

/// Data-entry tab
#[component]
pub fn AddData() -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg shadow p-6 max-w-3xl mx-auto">
            <h2 class="text-xl font-semibold flex items-center gap-2">
                <span>"➕"</span>
                "Adicionar Dados Ambientais"
            </h2>
            <p class="text-sm text-gray-500 mb-6">
                "Registre novos dados de impacto ambiental da sua organização"
            </p>

            <EntryForm />
        </section>
    }
}
