mod batch;
mod company;
mod counter;
mod error;
mod facets;
mod filter;
mod member;
mod pagination;
mod partner;
mod raw_record;
mod record_source;

pub use batch::*;
pub use company::*;
pub use counter::*;
pub use error::*;
pub use facets::*;
pub use filter::*;
pub use member::*;
pub use pagination::*;
pub use partner::*;
pub use raw_record::*;
pub use record_source::*;
