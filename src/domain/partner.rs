use serde::{Deserialize, Serialize};

use super::RawRecord;

const PLACEHOLDER_LOGO: &str = "/placeholder-logo.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
}

impl Partner {
    /// Normalizes one upstream partner row. Ids come back as integers
    /// or strings depending on the table; both are carried as strings.
    /// Rows without any id are dropped at the fetch boundary.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let id = raw
            .integer_field("Id")
            .map(|id| id.to_string())
            .or_else(|| raw.string_field("Id"))
            .or_else(|| raw.integer_field("id").map(|id| id.to_string()))
            .or_else(|| raw.string_field("id"))?;

        Some(Self {
            id,
            name: raw
                .string_field("Name")
                .unwrap_or_else(|| "Unknown".to_owned()),
            category: raw
                .string_field("Category")
                .unwrap_or_else(|| "Other".to_owned()),
            logo_url: raw
                .attachment_url("Logo")
                .unwrap_or_else(|| PLACEHOLDER_LOGO.to_owned()),
        })
    }
}
