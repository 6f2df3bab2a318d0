use std::sync::Arc;

use crate::domain::{Company, MemberSource, PartnerSource};

pub type MemberSourceType = Arc<dyn MemberSource + Send + Sync>;
pub type PartnerSourceType = Arc<dyn PartnerSource + Send + Sync>;
pub type CompanyCatalogType = Arc<Vec<Company>>;

#[derive(Clone)]
pub struct AppState {
    pub member_source: MemberSourceType,
    pub partner_source: PartnerSourceType,
    pub company_catalog: CompanyCatalogType,
}

impl AppState {
    pub fn new(
        member_source: MemberSourceType,
        partner_source: PartnerSourceType,
        company_catalog: CompanyCatalogType,
    ) -> Self {
        Self {
            member_source,
            partner_source,
            company_catalog,
        }
    }
}
