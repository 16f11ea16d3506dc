//! Chart rendering - Plotly.js figures for the summary tables
//!
//! Each table becomes a `<div>` plus an inline `<script>` calling
//! `Plotly.newPlot`. The page is expected to load plotly.js itself.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{SummaryTable, YearSummary};

/// Bar colour used by the bar charts
pub const BAR_COLOR: &str = "#1909f7";

const MIN_BUBBLE_PX: f64 = 12.0;
const MAX_BUBBLE_PX: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Donut,
    Treemap,
    HorizontalBar,
    LineMarkers,
    Bubble,
}

/// Static description of one dashboard chart
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
}

pub const FINANCIAL_LOSS: ChartSpec = ChartSpec {
    id: "chart-financial-loss",
    title: "Top Countries by Financial Loss",
    kind: ChartKind::Bar,
};
pub const ATTACK_TYPES: ChartSpec = ChartSpec {
    id: "chart-attack-types",
    title: "Most Common Attack Types",
    kind: ChartKind::Donut,
};
pub const INDUSTRIES: ChartSpec = ChartSpec {
    id: "chart-industries",
    title: "Top Targeted Industries (Treemap)",
    kind: ChartKind::Treemap,
};
pub const ATTACK_SOURCES: ChartSpec = ChartSpec {
    id: "chart-attack-sources",
    title: "Top Attack Sources",
    kind: ChartKind::HorizontalBar,
};
pub const RESOLUTION_TIME: ChartSpec = ChartSpec {
    id: "chart-resolution-time",
    title: "Avg Resolution Time by Country",
    kind: ChartKind::LineMarkers,
};
pub const AFFECTED_USERS: ChartSpec = ChartSpec {
    id: "chart-affected-users",
    title: "Users Affected by Country (Bubble Chart)",
    kind: ChartKind::Bubble,
};

/// A rendered chart, ready to be embedded in the page
#[derive(Debug, Clone, Serialize)]
pub struct ChartFragment {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    /// No rows to plot for the selected year
    pub empty: bool,
    pub html: String,
}

/// Render all six charts in dashboard order
pub fn render_summary(summary: &YearSummary) -> Result<Vec<ChartFragment>, serde_json::Error> {
    [
        (FINANCIAL_LOSS, &summary.financial_loss),
        (ATTACK_TYPES, &summary.attack_types),
        (INDUSTRIES, &summary.industries),
        (ATTACK_SOURCES, &summary.attack_sources),
        (RESOLUTION_TIME, &summary.resolution_time),
        (AFFECTED_USERS, &summary.affected_users),
    ]
    .into_iter()
    .map(|(spec, table)| render(spec, table))
    .collect()
}

/// Render a single table as the chart described by `spec`
pub fn render(spec: ChartSpec, table: &SummaryTable) -> Result<ChartFragment, serde_json::Error> {
    let data = traces(spec.kind, table);
    let layout = layout(spec, table);

    let html = format!(
        "<div id=\"{id}\" class=\"chart\"></div>\n\
         <script>Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});</script>",
        id = spec.id,
        data = script_safe(serde_json::to_string(&data)?),
        layout = script_safe(serde_json::to_string(&layout)?),
    );

    Ok(ChartFragment {
        id: spec.id,
        title: spec.title,
        kind: spec.kind,
        empty: table.is_empty(),
        html,
    })
}

fn traces(kind: ChartKind, table: &SummaryTable) -> Value {
    let labels = table.categories();
    let values = table.values();

    match kind {
        ChartKind::Bar => json!([{
            "type": "bar",
            "x": labels,
            "y": values,
            "marker": { "color": BAR_COLOR },
        }]),
        ChartKind::Donut => json!([{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hole": 0.4,
        }]),
        ChartKind::Treemap => json!([{
            "type": "treemap",
            "labels": labels,
            "parents": vec![""; labels.len()],
            "values": values,
            "branchvalues": "total",
        }]),
        ChartKind::HorizontalBar => json!([{
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": labels,
            "marker": { "color": BAR_COLOR },
        }]),
        ChartKind::LineMarkers => json!([{
            "type": "scatter",
            "mode": "lines+markers",
            "x": labels,
            "y": values,
        }]),
        ChartKind::Bubble => {
            let max = values.iter().copied().fold(0.0_f64, f64::max);
            let traces: Vec<Value> = table
                .rows
                .iter()
                .map(|row| {
                    json!({
                        "type": "scatter",
                        "mode": "markers",
                        "name": row.category,
                        "x": [row.category],
                        "y": [row.value],
                        "marker": { "size": [bubble_size(row.value, max)] },
                    })
                })
                .collect();
            Value::Array(traces)
        }
    }
}

fn layout(spec: ChartSpec, table: &SummaryTable) -> Value {
    let mut layout = json!({
        "title": { "text": spec.title },
        "margin": { "t": 60, "l": 60, "r": 20, "b": 60 },
    });

    match spec.kind {
        ChartKind::Bar | ChartKind::LineMarkers | ChartKind::Bubble => {
            layout["xaxis"] = json!({ "title": { "text": table.category_label } });
            layout["yaxis"] = json!({ "title": { "text": table.value_label } });
        }
        ChartKind::HorizontalBar => {
            layout["xaxis"] = json!({ "title": { "text": table.value_label } });
            // Highest count on top
            layout["yaxis"] = json!({
                "title": { "text": table.category_label },
                "autorange": "reversed",
            });
        }
        ChartKind::Donut | ChartKind::Treemap => {}
    }

    layout
}

/// Marker diameter in pixels, proportional to `value / max`
fn bubble_size(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return MIN_BUBBLE_PX;
    }
    MIN_BUBBLE_PX + (MAX_BUBBLE_PX - MIN_BUBBLE_PX) * (value / max)
}

/// Keep JSON from terminating the surrounding `<script>` element
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}
