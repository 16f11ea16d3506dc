//! Dashboard page handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};

use crate::{analytics, charts, AppError, AppResult, AppState};
use crate::models::{DashboardParams, YearQuery};
use crate::templates::DashboardView;

/// `GET /` - render the six charts for the requested year
///
/// An unparseable `year` or query string falls back to the most recent year.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> AppResult<Html<String>> {
    let params = match query {
        Ok(Query(query)) => DashboardParams::from_query(&query).unwrap_or_else(|err| {
            tracing::warn!("Ignoring year parameter: {}", err);
            DashboardParams::default()
        }),
        Err(rejection) => {
            tracing::warn!("Ignoring query string: {}", rejection.body_text());
            DashboardParams::default()
        }
    };

    let year = params
        .resolve(&state.dataset)
        .ok_or_else(|| AppError::InternalError("dataset has no years".to_string()))?;

    let subset = state.dataset.for_year(year);
    let summary = analytics::summarize(&subset, state.config.top_n);
    let charts = charts::render_summary(&summary)?;

    tracing::debug!(year, incidents = summary.incident_count, "Rendering dashboard");

    let html = state.templates.render_dashboard(&DashboardView {
        years: state.dataset.years(),
        selected_year: year,
        incident_count: summary.incident_count,
        charts: &charts,
    })?;

    Ok(Html(html))
}
