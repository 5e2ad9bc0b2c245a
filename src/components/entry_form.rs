//! Entry Form Component
//!
//! Form for logging new environmental records.

use leptos::*;

use crate::api;
use crate::app::{refresh_records, refresh_summary};
use crate::state::global::{unit_for_code, AppState, Category, RecordForm};

/// Record entry form
///
/// The form never exposes a unit field; the unit is derived from the selected
/// category at submission time. On success the form resets to blank defaults
/// with today's date; on failure it keeps the user's input for a manual retry.
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let form = state.form;
    let loading = state.loading;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let payload = form.get();

        state.loading.set(true);

        spawn_local(async move {
            match api::create_record(&payload).await {
                Ok(()) => {
                    state.form.set(RecordForm::blank());
                    refresh_records(&state);
                    refresh_summary(&state);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Erro ao adicionar dados: {}", e).into());
                }
            }
            // Cleared on every exit path so the submit button never sticks
            state.loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                // Category selector
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Tipo de Impacto"</label>
                    <select
                        required=true
                        on:change=move |ev| {
                            form.update(|f| f.data_type = event_target_value(&ev));
                        }
                        prop:value=move || form.get().data_type
                        class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                               focus:border-green-500 focus:outline-none"
                    >
                        <option value="" disabled=true>"Selecione o tipo"</option>
                        {Category::ALL.into_iter().map(|cat| view! {
                            <option value=cat.code()>{cat.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                // Value input with derived-unit hint
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Valor"</label>
                    <input
                        type="number"
                        step="0.01"
                        required=true
                        placeholder="Digite o valor"
                        prop:value=move || form.get().value
                        on:input=move |ev| {
                            form.update(|f| f.value = event_target_value(&ev));
                        }
                        class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                               focus:border-green-500 focus:outline-none"
                    />
                    {move || {
                        let code = form.get().data_type;
                        (!code.is_empty()).then(|| view! {
                            <p class="text-sm text-gray-500 mt-1">
                                {format!("Unidade: {}", unit_for_code(&code))}
                            </p>
                        })
                    }}
                </div>

                // Measurement date
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Data do Registro"</label>
                    <input
                        type="date"
                        required=true
                        prop:value=move || form.get().date_recorded
                        on:input=move |ev| {
                            form.update(|f| f.date_recorded = event_target_value(&ev));
                        }
                        class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                               focus:border-green-500 focus:outline-none"
                    />
                </div>
            </div>

            // Optional description
            <div>
                <label class="block text-sm text-gray-600 mb-2">"Descrição (Opcional)"</label>
                <textarea
                    rows="3"
                    placeholder="Adicione detalhes sobre este registro..."
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        form.update(|f| f.description = event_target_value(&ev));
                    }
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-green-500 focus:outline-none"
                />
            </div>

            // Submit button, gated by the loading flag
            <button
                type="submit"
                disabled=move || loading.get()
                class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-400
                       disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if loading.get() { "Adicionando..." } else { "Adicionar Dados" }}
            </button>
        </form>
    }
}
