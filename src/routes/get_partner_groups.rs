use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{partner_groups, DirectoryAPIError, PartnerGroup},
    AppState,
};

#[tracing::instrument(name = "Get partner groups route handler", skip_all)]
pub async fn get_partner_groups(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PartnerGroup>>), DirectoryAPIError> {
    let partners = state
        .partner_source
        .fetch_partners()
        .await
        .map_err(|e| DirectoryAPIError::UpstreamError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(partner_groups(&partners))))
}
