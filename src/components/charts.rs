//! Chart Components
//!
//! Bar and pie charts over the monthly summary, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{label_for_code, unit_for_code, AppState, SummaryEntry};

/// Fixed chart palette, cycled by entry position in the summary list
pub const CHART_COLORS: [&str; 4] = [
    "#0088FE", // Blue
    "#00C49F", // Teal
    "#FFBB28", // Amber
    "#FF8042", // Orange
];

/// Bar fill color
const BAR_COLOR: &str = "#8884d8";

/// One bar of the category bar chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

/// One slice of the distribution pie chart
#[derive(Clone, Debug, PartialEq)]
pub struct PieDatum {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

/// Map summary entries to bar-chart data, order preserving. Labels and units
/// resolve through the category table; unknown codes keep their raw code.
pub fn bar_data(summary: &[SummaryEntry]) -> Vec<ChartDatum> {
    summary
        .iter()
        .map(|entry| ChartDatum {
            name: label_for_code(&entry.data_type),
            value: entry.total,
            unit: unit_for_code(&entry.data_type).to_string(),
        })
        .collect()
}

/// Map summary entries to pie-chart data. Colors are assigned by position in
/// the summary list, cycling the fixed palette; they are not keyed by
/// category identity.
pub fn pie_data(summary: &[SummaryEntry]) -> Vec<PieDatum> {
    summary
        .iter()
        .enumerate()
        .map(|(idx, entry)| PieDatum {
            name: label_for_code(&entry.data_type),
            value: entry.total,
            color: CHART_COLORS[idx % CHART_COLORS.len()],
        })
        .collect()
}

/// Bar chart of totals per category
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the summary changes
    create_effect(move |_| {
        let data = bar_data(&state.summary.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &data);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="300"
            class="w-full rounded-lg"
        />
    }
}

/// Pie chart of the relative distribution across categories
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let data = pie_data(&state.summary.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &data);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="480"
                height="300"
                class="w-full rounded-lg"
            />
            <PieLegend />
        </div>
    }
}

/// Legend listing each slice with its positional color and share
#[component]
fn PieLegend() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                let data = pie_data(&state.summary.get());
                let total: f64 = data.iter().map(|d| d.value).sum();

                data.into_iter()
                    .map(|datum| {
                        let percent = if total > 0.0 {
                            datum.value / total * 100.0
                        } else {
                            0.0
                        };
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", datum.color)
                                />
                                <span class="text-sm text-gray-600">
                                    {format!("{} {:.0}%", datum.name, percent)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Draw the bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &[ChartDatum]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let max_value = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Horizontal grid lines and y-axis labels
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style_str("#6b7280");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars with category labels underneath
    let slot = chart_width / data.len() as f64;
    let bar_width = slot * 0.6;

    for (i, datum) in data.iter().enumerate() {
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = datum.value / y_max * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(BAR_COLOR);
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style_str("#374151");
        let label = truncate_label(&datum.name, 14);
        let _ = ctx.fill_text(&label, x, height - margin_bottom + 16.0);
    }
}

/// Draw the pie chart on canvas
fn draw_pie_chart(canvas: &HtmlCanvasElement, data: &[PieDatum]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: f64 = data.iter().map(|d| d.value).sum();
    if data.is_empty() || total <= 0.0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 30.0;

    let mut start_angle = -std::f64::consts::FRAC_PI_2;

    for datum in data {
        let sweep = datum.value / total * std::f64::consts::PI * 2.0;
        let end_angle = start_angle + sweep;

        ctx.set_fill_style_str(datum.color);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.fill();

        start_angle = end_angle;
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str("#9ca3af");
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("Sem dados no período", width / 2.0 - 80.0, height / 2.0);
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max_chars - 1).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(data_type: &str, total: f64, count: u32) -> SummaryEntry {
        SummaryEntry {
            data_type: data_type.to_string(),
            total,
            average: None,
            count,
        }
    }

    #[test]
    fn test_bar_data_resolves_labels_and_units() {
        let summary = vec![entry("water", 500.0, 3), entry("co2", 80.0, 1)];
        let data = bar_data(&summary);

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].name, "Consumo de Água");
        assert_eq!(data[0].value, 500.0);
        assert_eq!(data[0].unit, "litros");
        assert_eq!(data[1].name, "Emissões CO2");
        assert_eq!(data[1].value, 80.0);
        assert_eq!(data[1].unit, "kg CO2e");
    }

    #[test]
    fn test_bar_data_unknown_code_falls_back_to_raw() {
        let summary = vec![entry("methane", 12.0, 2)];
        let data = bar_data(&summary);
        assert_eq!(data[0].name, "methane");
        assert_eq!(data[0].unit, "");
    }

    #[test]
    fn test_pie_colors_are_positional() {
        let summary = vec![entry("water", 500.0, 3), entry("co2", 80.0, 1)];
        let data = pie_data(&summary);

        assert_eq!(data[0].color, CHART_COLORS[0]);
        assert_eq!(data[1].color, CHART_COLORS[1]);

        // Same categories in the opposite order pick up different colors
        let reversed = vec![entry("co2", 80.0, 1), entry("water", 500.0, 3)];
        let data = pie_data(&reversed);
        assert_eq!(data[0].name, "Emissões CO2");
        assert_eq!(data[0].color, CHART_COLORS[0]);
    }

    #[test]
    fn test_pie_palette_wraps_past_four_entries() {
        let summary: Vec<_> = (0..5).map(|i| entry(&format!("t{}", i), 1.0, 1)).collect();
        let data = pie_data(&summary);
        assert_eq!(data[4].color, CHART_COLORS[0]);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let summary = vec![entry("waste", 42.0, 7), entry("energy", 9.5, 2)];
        assert_eq!(bar_data(&summary), bar_data(&summary));
        assert_eq!(pie_data(&summary), pie_data(&summary));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("curto", 14), "curto");
        assert_eq!(truncate_label("Geração de Resíduos", 14), "Geração de Re…");
    }
}
