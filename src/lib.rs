use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    serve::Serve,
    Json, Router,
};

use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Level;

use domain::DirectoryAPIError;
pub mod routes;
use crate::utils::tracing::*;
use routes::{
    get_companies, get_company_directory, get_member_directory, get_members,
    get_partner_groups, get_partners,
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for DirectoryAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            DirectoryAPIError::UpstreamError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream data source error".to_string(),
                )
            }
            DirectoryAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        // The directory pages are embedded in a host site's iframes, so
        // reads are open to any origin.
        let cors = CorsLayer::new()
            .allow_methods([Method::GET])
            .allow_origin(Any);

        let router = Router::new()
            .route("/api/members", get(get_members))
            .route("/api/members/directory", get(get_member_directory))
            .route("/api/partners", get(get_partners))
            .route("/api/partners/groups", get(get_partner_groups))
            .route("/api/companies", get(get_companies))
            .route("/api/companies/directory", get(get_company_directory))
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
