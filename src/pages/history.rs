//! History Page
//!
//! Full record list, one row per record in backend order.

use leptos::*;

use crate::state::global::{format_date_br, format_value, icon_for_code, label_for_code, AppState};

/// History tab
#[component]
pub fn History() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <section class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold">"Histórico de Registros"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "Todos os dados ambientais registrados"
            </p>

            <div class="space-y-4">
                {move || {
                    let records = state.records.get();

                    if records.is_empty() {
                        view! { <EmptyHistory /> }.into_view()
                    } else {
                        records.into_iter().map(|record| {
                            let icon = icon_for_code(&record.data_type);
                            let label = label_for_code(&record.data_type);
                            let date = format_date_br(&record.date_recorded);
                            let badge = format!("{} {}", format_value(record.value), record.unit);
                            let description = record.description
                                .filter(|d| !d.is_empty());

                            view! {
                                <div class="flex items-center justify-between p-4 border rounded-lg hover:bg-gray-50">
                                    <div class="flex items-center gap-3">
                                        <span class="text-xl">{icon}</span>
                                        <div>
                                            <p class="font-medium">{label}</p>
                                            <p class="text-sm text-gray-500">{date}</p>
                                            {description.map(|d| view! {
                                                <p class="text-sm text-gray-500 mt-1">{d}</p>
                                            })}
                                        </div>
                                    </div>
                                    <span class="bg-gray-100 rounded-full px-3 py-1 text-lg font-semibold">
                                        {badge}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Empty-state message shown when no record exists yet
#[component]
fn EmptyHistory() -> impl IntoView {
    view! {
        <div class="text-center py-8 text-gray-500">
            <div class="text-4xl mb-4">"⚠️"</div>
            <p>"Nenhum dado registrado ainda."</p>
            <p>"Comece adicionando alguns dados na aba \"Adicionar Dados\"."</p>
        </div>
    }
}
