//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the domain types
//! shared across the dashboard.

use leptos::*;

/// The four environmental impact categories tracked by EcoTrack.
///
/// This is a closed enumeration: display metadata (icon, label, unit) is
/// resolved exhaustively so a new category cannot be added without the
/// compiler pointing at every table that needs updating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Co2,
    Water,
    Waste,
    Energy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Co2,
        Category::Water,
        Category::Waste,
        Category::Energy,
    ];

    /// Wire code used by the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Co2 => "co2",
            Category::Water => "water",
            Category::Waste => "waste",
            Category::Energy => "energy",
        }
    }

    /// Parse a wire code. Unknown codes stay raw strings at the call sites.
    pub fn from_code(code: &str) -> Option<Category> {
        match code {
            "co2" => Some(Category::Co2),
            "water" => Some(Category::Water),
            "waste" => Some(Category::Waste),
            "energy" => Some(Category::Energy),
            _ => None,
        }
    }

    /// Display label (pt-BR, matching the rest of the UI copy).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Co2 => "Emissões CO2",
            Category::Water => "Consumo de Água",
            Category::Waste => "Geração de Resíduos",
            Category::Energy => "Consumo de Energia",
        }
    }

    /// Unit the backend stores for this category. Derived client-side at
    /// submission time, never typed by the user.
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Co2 => "kg CO2e",
            Category::Water => "litros",
            Category::Waste => "kg",
            Category::Energy => "kWh",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Co2 => "🌿",
            Category::Water => "💧",
            Category::Waste => "🗑️",
            Category::Energy => "⚡",
        }
    }
}

/// Label for a raw wire code, falling back to the code itself when the
/// backend sends a category this client does not know.
pub fn label_for_code(code: &str) -> String {
    Category::from_code(code)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Icon for a raw wire code, with a generic fallback.
pub fn icon_for_code(code: &str) -> &'static str {
    Category::from_code(code).map(|c| c.icon()).unwrap_or("📊")
}

/// Unit for a raw wire code; unknown codes have no unit.
pub fn unit_for_code(code: &str) -> &'static str {
    Category::from_code(code).map(|c| c.unit()).unwrap_or("")
}

/// One logged measurement, as returned by the record list endpoint.
///
/// The backend also sends `user_id` and `created_at`; they are accepted but
/// unused by this client.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnvironmentalRecord {
    pub id: u32,
    pub data_type: String,
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_recorded: String,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregated total for one category over the queried period.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SummaryEntry {
    pub data_type: String,
    pub total: f64,
    #[serde(default)]
    pub average: Option<f64>,
    pub count: u32,
}

/// Ephemeral form state for the data-entry tab.
///
/// `value` stays raw input text until submission; the unit is recomputed from
/// the category table at submit time, so there is no unit field to go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordForm {
    pub data_type: String,
    pub value: String,
    pub description: String,
    pub date_recorded: String,
}

impl RecordForm {
    /// Blank form with `date_recorded` preset to today.
    pub fn blank() -> Self {
        Self {
            data_type: String::new(),
            value: String::new(),
            description: String::new(),
            date_recorded: today_iso(),
        }
    }
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::blank()
    }
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Format a wire date for display in the pt-BR convention (`dd/mm/yyyy`).
///
/// The backend may append a time component (`2024-03-01T00:00:00`); only the
/// calendar-date prefix matters for display. Unparsable input is shown as-is.
pub fn format_date_br(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Format a measurement value for display: up to two decimal places with
/// trailing zeros trimmed (`500` not `500.00`, `120.5` not `120.50`).
pub fn format_value(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// The three display tabs of the single-page dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    AddData,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::AddData, Tab::History];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::AddData => "Adicionar Dados",
            Tab::History => "Histórico",
        }
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// All records from the backend, in backend order
    pub records: RwSignal<Vec<EnvironmentalRecord>>,
    /// Monthly summary, one entry per category present in the period
    pub summary: RwSignal<Vec<SummaryEntry>>,
    /// Current data-entry form values
    pub form: RwSignal<RecordForm>,
    /// True strictly while a record submission is in flight
    pub loading: RwSignal<bool>,
    /// Currently selected display tab
    pub active_tab: RwSignal<Tab>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        records: create_rw_signal(Vec::new()),
        summary: create_rw_signal(Vec::new()),
        form: create_rw_signal(RecordForm::blank()),
        loading: create_rw_signal(false),
        active_tab: create_rw_signal(Tab::Dashboard),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_code(cat.code()), Some(cat));
        }
        assert_eq!(Category::from_code("plastic"), None);
    }

    #[test]
    fn test_category_units() {
        assert_eq!(Category::Co2.unit(), "kg CO2e");
        assert_eq!(Category::Water.unit(), "litros");
        assert_eq!(Category::Waste.unit(), "kg");
        assert_eq!(Category::Energy.unit(), "kWh");
    }

    #[test]
    fn test_label_fallback_for_unknown_code() {
        assert_eq!(label_for_code("co2"), "Emissões CO2");
        assert_eq!(label_for_code("methane"), "methane");
        assert_eq!(unit_for_code("methane"), "");
    }

    #[test]
    fn test_blank_form_defaults_to_today() {
        let form = RecordForm::blank();
        assert_eq!(form.data_type, "");
        assert_eq!(form.value, "");
        assert_eq!(form.description, "");
        assert_eq!(form.date_recorded, today_iso());
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2024-03-01"), "01/03/2024");
        assert_eq!(format_date_br("2024-03-01T00:00:00"), "01/03/2024");
        assert_eq!(format_date_br("not a date"), "not a date");
    }

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        assert_eq!(format_value(500.0), "500");
        assert_eq!(format_value(120.5), "120.5");
        assert_eq!(format_value(120.55), "120.55");
    }

    #[test]
    fn test_record_tolerates_backend_extras() {
        let json = r#"{
            "id": 1,
            "user_id": 1,
            "data_type": "co2",
            "value": 120.5,
            "unit": "kg CO2e",
            "description": "",
            "date_recorded": "2024-03-01T00:00:00",
            "created_at": "2024-03-02T10:00:00"
        }"#;
        let record: EnvironmentalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.data_type, "co2");
        assert_eq!(record.value, 120.5);
        assert_eq!(format_date_br(&record.date_recorded), "01/03/2024");
    }

    #[test]
    fn test_summary_entry_tolerates_average() {
        let json = r#"{"data_type": "water", "total": 500.0, "average": 166.7, "count": 3}"#;
        let entry: SummaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.total, 500.0);
        assert_eq!(entry.average, Some(166.7));
        assert_eq!(entry.count, 3);

        let bare = r#"{"data_type": "water", "total": 500.0, "count": 3}"#;
        let entry: SummaryEntry = serde_json::from_str(bare).unwrap();
        assert_eq!(entry.average, None);
    }
}
