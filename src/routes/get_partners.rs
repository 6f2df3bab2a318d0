use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{DirectoryAPIError, Partner},
    AppState,
};

#[tracing::instrument(name = "Get partners route handler", skip_all)]
pub async fn get_partners(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Partner>>), DirectoryAPIError> {
    let partners = state
        .partner_source
        .fetch_partners()
        .await
        .map_err(|e| DirectoryAPIError::UpstreamError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(partners)))
}
