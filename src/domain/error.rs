use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryAPIError {
    #[error("Upstream data source error")]
    UpstreamError(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}
