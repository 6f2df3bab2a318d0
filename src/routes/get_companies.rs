use axum::{extract::State, http::StatusCode, Json};

use crate::{domain::Company, AppState};

#[tracing::instrument(name = "Get companies route handler", skip_all)]
pub async fn get_companies(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<Company>>) {
    let companies = state.company_catalog.as_ref().clone();

    (StatusCode::OK, Json(companies))
}
