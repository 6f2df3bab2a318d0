use std::sync::Arc;

use community_directory::{
    app_state::{AppState, MemberSourceType, PartnerSourceType},
    services::{
        mock_data::{company_catalog, MockMemberSource, MockPartnerSource},
        nocodb::{NocoDbClient, NocoDbMemberSource, NocoDbPartnerSource},
    },
    utils::{
        constants::{
            prod, NOCODB_API_TOKEN, NOCODB_BASE_URL, NOCODB_MEMBERS_TABLE_ID,
            NOCODB_PARTNERS_TABLE_ID,
        },
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let nocodb_client = NOCODB_API_TOKEN.as_ref().map(|token| {
        NocoDbClient::new(NOCODB_BASE_URL.clone(), token.clone())
            .expect("Failed to build NocoDB client")
    });

    let app_state = AppState::new(
        member_source(nocodb_client.as_ref()),
        partner_source(nocodb_client.as_ref()),
        Arc::new(company_catalog()),
    );

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

// A missing token or table id is a deliberate configuration choice,
// not an error: the service falls back to the static mock collection.
fn member_source(client: Option<&NocoDbClient>) -> MemberSourceType {
    match (client, NOCODB_MEMBERS_TABLE_ID.as_ref()) {
        (Some(client), Some(table_id)) => Arc::new(NocoDbMemberSource::new(
            client.clone(),
            table_id.clone(),
        )),
        _ => {
            tracing::info!("members table not configured, serving mock data");
            Arc::new(MockMemberSource)
        }
    }
}

fn partner_source(client: Option<&NocoDbClient>) -> PartnerSourceType {
    match (client, NOCODB_PARTNERS_TABLE_ID.as_ref()) {
        (Some(client), Some(table_id)) => Arc::new(NocoDbPartnerSource::new(
            client.clone(),
            table_id.clone(),
        )),
        _ => {
            tracing::info!("partners table not configured, serving mock data");
            Arc::new(MockPartnerSource)
        }
    }
}
