use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{
    Member, MemberSource, Partner, PartnerSource, RawRecord, SourceError,
};

// The directory tables stay well under this, so one page is enough.
const FETCH_LIMIT: u32 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const TOKEN_HEADER: &str = "xc-token";

/// Client for the hosted NocoDB store. Clone is cheap: reqwest's
/// Client shares its connection pool internally.
#[derive(Clone)]
pub struct NocoDbClient {
    http_client: Client,
    base_url: String,
    api_token: Secret<String>,
}

#[derive(Debug, Deserialize)]
struct RecordListResponse {
    #[serde(default)]
    list: Vec<RawRecord>,
}

impl NocoDbClient {
    pub fn new(base_url: String, api_token: Secret<String>) -> Result<Self> {
        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            base_url,
            api_token,
        })
    }

    /// One single-page fetch of a table. No retries and no upstream
    /// pagination loop; a response is accepted or rejected wholesale.
    #[tracing::instrument(name = "Fetch table rows", skip(self))]
    pub async fn fetch_rows(
        &self,
        table_id: &str,
    ) -> Result<Vec<RawRecord>, SourceError> {
        let url = format!("{}/api/v2/tables/{}/records", self.base_url, table_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("limit", FETCH_LIMIT.to_string()),
                ("offset", "0".to_owned()),
            ])
            .header(TOKEN_HEADER, self.api_token.expose_secret())
            .send()
            .await
            .map_err(|e| SourceError::Request(eyre!(e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body: RecordListResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(eyre!(e)))?;

        Ok(body.list)
    }
}

pub struct NocoDbMemberSource {
    client: NocoDbClient,
    table_id: String,
}

impl NocoDbMemberSource {
    pub fn new(client: NocoDbClient, table_id: String) -> Self {
        Self { client, table_id }
    }
}

#[async_trait::async_trait]
impl MemberSource for NocoDbMemberSource {
    #[tracing::instrument(name = "Fetch members from upstream store", skip_all)]
    async fn fetch_members(&self) -> Result<Vec<Member>, SourceError> {
        let rows = self.client.fetch_rows(&self.table_id).await?;
        let row_count = rows.len();

        let members: Vec<Member> =
            rows.iter().filter_map(Member::from_raw).collect();
        if members.len() < row_count {
            tracing::warn!(
                "dropped {} member rows without an id",
                row_count - members.len()
            );
        }

        tracing::debug!("fetched {} members", members.len());
        Ok(members)
    }
}

pub struct NocoDbPartnerSource {
    client: NocoDbClient,
    table_id: String,
}

impl NocoDbPartnerSource {
    pub fn new(client: NocoDbClient, table_id: String) -> Self {
        Self { client, table_id }
    }
}

#[async_trait::async_trait]
impl PartnerSource for NocoDbPartnerSource {
    #[tracing::instrument(name = "Fetch partners from upstream store", skip_all)]
    async fn fetch_partners(&self) -> Result<Vec<Partner>, SourceError> {
        let rows = self.client.fetch_rows(&self.table_id).await?;
        let row_count = rows.len();

        let partners: Vec<Partner> =
            rows.iter().filter_map(Partner::from_raw).collect();
        if partners.len() < row_count {
            tracing::warn!(
                "dropped {} partner rows without an id",
                row_count - partners.len()
            );
        }

        tracing::debug!("fetched {} partners", partners.len());
        Ok(partners)
    }
}
