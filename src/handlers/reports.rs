//! Reports handlers - summary tables as JSON

use axum::{extract::{rejection::QueryRejection, Query, State}, Json};
use serde::Serialize;

use crate::{analytics, AppState, AppResult, AppError};
use crate::models::{DashboardParams, YearQuery, YearSummary};

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Most recent first
    pub years: Vec<i32>,
    pub default_year: Option<i32>,
}

/// Summary tables for a year
///
/// Unlike the HTML page, an unparseable `year` or query string is rejected
/// with 400.
pub async fn summary(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> AppResult<Json<YearSummary>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("Rejected summary query: {}", rejection.body_text());
        AppError::ValidationError(rejection.body_text())
    })?;

    let params = DashboardParams::from_query(&query)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let year = params
        .resolve(&state.dataset)
        .ok_or_else(|| AppError::NotFound("No years available".to_string()))?;

    let subset = state.dataset.for_year(year);
    Ok(Json(analytics::summarize(&subset, state.config.top_n)))
}

/// Available years
pub async fn years(State(state): State<AppState>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.dataset.years().to_vec(),
        default_year: state.dataset.latest_year(),
    })
}
