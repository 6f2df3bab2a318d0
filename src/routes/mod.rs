mod get_companies;
mod get_company_directory;
mod get_member_directory;
mod get_members;
mod get_partner_groups;
mod get_partners;

pub use get_companies::*;
pub use get_company_directory::*;
pub use get_member_directory::*;
pub use get_members::*;
pub use get_partner_groups::*;
pub use get_partners::*;
