use std::sync::Arc;

use community_directory::{
    app_state::AppState,
    services::{
        mock_data::{company_catalog, MockMemberSource, MockPartnerSource},
        nocodb::{NocoDbClient, NocoDbMemberSource, NocoDbPartnerSource},
    },
    utils::constants::test,
    Application,
};
use reqwest::Response;
use secrecy::Secret;
use serde_json::Value;
use test_context::AsyncTestContext;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_API_TOKEN: &str = "test-token";
pub const TEST_MEMBERS_TABLE_ID: &str = "members-table";
pub const TEST_PARTNERS_TABLE_ID: &str = "partners-table";

pub struct TestApp {
    pub address: String,
    pub nocodb_server: MockServer,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// App wired against a wiremock stand-in for the upstream store.
    pub async fn new() -> Self {
        let nocodb_server = MockServer::start().await;
        let client = NocoDbClient::new(
            nocodb_server.uri(),
            Secret::new(TEST_API_TOKEN.to_owned()),
        )
        .expect("Failed to build NocoDB client");

        let app_state = AppState::new(
            Arc::new(NocoDbMemberSource::new(
                client.clone(),
                TEST_MEMBERS_TABLE_ID.to_owned(),
            )),
            Arc::new(NocoDbPartnerSource::new(
                client,
                TEST_PARTNERS_TABLE_ID.to_owned(),
            )),
            Arc::new(company_catalog()),
        );

        Self::spawn(app_state, nocodb_server).await
    }

    /// App wired against the static mock collections, as when the
    /// upstream store is not configured.
    pub async fn with_mock_sources() -> Self {
        let nocodb_server = MockServer::start().await;

        let app_state = AppState::new(
            Arc::new(MockMemberSource),
            Arc::new(MockPartnerSource),
            Arc::new(company_catalog()),
        );

        Self::spawn(app_state, nocodb_server).await
    }

    async fn spawn(app_state: AppState, nocodb_server: MockServer) -> Self {
        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        Self {
            address,
            nocodb_server,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_members(&self) -> Response {
        self.http_client
            .get(format!("{}/api/members", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member_directory(
        &self,
        query: &[(&str, &str)],
    ) -> Response {
        self.http_client
            .get(format!("{}/api/members/directory", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_partners(&self) -> Response {
        self.http_client
            .get(format!("{}/api/partners", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_partner_groups(&self) -> Response {
        self.http_client
            .get(format!("{}/api/partners/groups", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_companies(&self) -> Response {
        self.http_client
            .get(format!("{}/api/companies", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_company_directory(
        &self,
        query: &[(&str, &str)],
    ) -> Response {
        self.http_client
            .get(format!("{}/api/companies/directory", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub async fn mount_table_rows(app: &TestApp, table_id: &str, rows: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/tables/{}/records", table_id)))
        .and(query_param("limit", "1000"))
        .and(query_param("offset", "0"))
        .and(header("xc-token", TEST_API_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "list": rows })),
        )
        .mount(&app.nocodb_server)
        .await;
}

pub async fn mount_table_failure(app: &TestApp, table_id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/tables/{}/records", table_id)))
        .respond_with(ResponseTemplate::new(status))
        .mount(&app.nocodb_server)
        .await;
}

pub async fn mount_table_malformed(app: &TestApp, table_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/tables/{}/records", table_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("this is not json"),
        )
        .mount(&app.nocodb_server)
        .await;
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}
