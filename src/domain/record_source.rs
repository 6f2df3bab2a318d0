use color_eyre::eyre::Report;
use thiserror::Error;

use super::{Member, Partner};

#[async_trait::async_trait]
pub trait MemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, SourceError>;
}

#[async_trait::async_trait]
pub trait PartnerSource {
    async fn fetch_partners(&self) -> Result<Vec<Partner>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Upstream request failed")]
    Request(#[source] Report),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Malformed upstream response")]
    Malformed(#[source] Report),
}
