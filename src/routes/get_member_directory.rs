use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        batch_groups, member_batches, member_studies, paginate, summarize,
        BatchGroup, DirectoryAPIError, DirectorySummary, FacetSelection,
        Member, MemberFilter,
    },
    utils::constants::MEMBERS_PAGE_SIZE,
    AppState,
};

#[derive(Deserialize)]
pub struct MemberDirectoryQueryParams {
    batch: Option<String>,
    study: Option<String>,
    page: Option<usize>,
}

#[tracing::instrument(name = "Get member directory route handler", skip_all)]
pub async fn get_member_directory(
    State(state): State<AppState>,
    Query(params): Query<MemberDirectoryQueryParams>,
) -> Result<(StatusCode, Json<MemberDirectoryResponse>), DirectoryAPIError> {
    let members = state
        .member_source
        .fetch_members()
        .await
        .map_err(|e| DirectoryAPIError::UpstreamError(eyre!(e)))?;

    let filter = MemberFilter {
        batch: FacetSelection::from_param(params.batch.as_deref()),
        study: FacetSelection::from_param(params.study.as_deref()),
    };
    let filtered = filter.apply(&members);
    let page = paginate(&filtered, MEMBERS_PAGE_SIZE, params.page.unwrap_or(1));

    // Facets, groups and summary always describe the full collection,
    // not the filtered subset.
    let response = Json(MemberDirectoryResponse {
        facets: MemberFacets {
            batches: member_batches(&members),
            studies: member_studies(&members),
        },
        batches: batch_groups(&members),
        summary: summarize(&members),
        total_matching: filtered.len(),
        total_pages: page.total_pages,
        current_page: page.current_page,
        members: page.items,
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, Serialize)]
pub struct MemberDirectoryResponse {
    pub members: Vec<Member>,
    #[serde(rename = "totalMatching")]
    pub total_matching: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    pub facets: MemberFacets,
    pub batches: Vec<BatchGroup>,
    pub summary: DirectorySummary,
}

#[derive(Debug, Serialize)]
pub struct MemberFacets {
    pub batches: Vec<String>,
    pub studies: Vec<String>,
}
