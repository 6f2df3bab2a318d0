use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{DirectoryAPIError, Member},
    AppState,
};

#[tracing::instrument(name = "Get members route handler", skip_all)]
pub async fn get_members(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Member>>), DirectoryAPIError> {
    let members = state
        .member_source
        .fetch_members()
        .await
        .map_err(|e| DirectoryAPIError::UpstreamError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(members)))
}
