use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        company_batches, company_categories, company_years, Company,
        CompanyFilter, FacetSelection,
    },
    AppState,
};

#[derive(Deserialize)]
pub struct CompanyDirectoryQueryParams {
    batch: Option<String>,
    category: Option<String>,
    year: Option<String>,
}

#[tracing::instrument(name = "Get company directory route handler", skip_all)]
pub async fn get_company_directory(
    State(state): State<AppState>,
    Query(params): Query<CompanyDirectoryQueryParams>,
) -> (StatusCode, Json<CompanyDirectoryResponse>) {
    let companies = state.company_catalog.as_ref();

    let filter = CompanyFilter {
        batch: FacetSelection::from_param(params.batch.as_deref()),
        category: FacetSelection::from_param(params.category.as_deref()),
        year: FacetSelection::from_param(params.year.as_deref()),
    };
    let filtered = filter.apply(companies);

    let response = Json(CompanyDirectoryResponse {
        facets: CompanyFacets {
            batches: company_batches(companies),
            categories: company_categories(companies),
            years: company_years(companies),
        },
        total: filtered.len(),
        companies: filtered,
    });

    (StatusCode::OK, response)
}

#[derive(Debug, Serialize)]
pub struct CompanyDirectoryResponse {
    pub companies: Vec<Company>,
    pub total: usize,
    pub facets: CompanyFacets,
}

#[derive(Debug, Serialize)]
pub struct CompanyFacets {
    pub batches: Vec<String>,
    pub categories: Vec<String>,
    pub years: Vec<String>,
}
