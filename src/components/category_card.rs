//! Category Card Component
//!
//! Displays one summary entry: label, monthly total, unit and record count.

use leptos::*;

use crate::state::global::{format_value, icon_for_code, label_for_code, unit_for_code, SummaryEntry};

/// Summary card for one environmental category
#[component]
pub fn CategoryCard(entry: SummaryEntry) -> impl IntoView {
    let label = label_for_code(&entry.data_type);
    let icon = icon_for_code(&entry.data_type);
    let unit = unit_for_code(&entry.data_type);
    let average = entry.average;

    view! {
        <div class="bg-white rounded-lg shadow p-4 hover:shadow-lg transition-shadow border border-gray-200">
            // Header with label and category icon
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-gray-600">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>

            // Monthly total
            <div class="text-2xl font-bold mt-2">
                {format_value(entry.total)}
            </div>
            <p class="text-xs text-gray-500">
                {format!("{} (últimos 30 dias)", unit)}
            </p>

            <div class="flex items-center justify-between mt-2">
                <span class="text-xs text-green-600">
                    {format!("{} registros", entry.count)}
                </span>
                {average.map(|avg| view! {
                    <span class="text-xs text-gray-500">
                        {format!("média {}", format_value(avg))}
                    </span>
                })}
            </div>
        </div>
    }
}
