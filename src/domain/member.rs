use serde::{Deserialize, Serialize};

use super::RawRecord;

const PLACEHOLDER_IMAGE: &str = "/placeholder-profile.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub batch: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "linkedinUrl", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Member {
    /// Normalizes one upstream row. Every field has a fallback except
    /// the id: rows carrying neither "Id" nor "id" yield `None` and are
    /// dropped at the fetch boundary, since the rest of the system
    /// assumes ids are present and unique.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let id = raw
            .integer_field("Id")
            .or_else(|| raw.integer_field("id"))?;

        Some(Self {
            id,
            name: raw
                .string_field("Name")
                .unwrap_or_else(|| "Unknown".to_owned()),
            batch: raw.string_field("Batch").unwrap_or_default(),
            role: raw.string_field("Role").unwrap_or_default(),
            study: raw.string_field("Study"),
            company: raw.string_field("Company"),
            linkedin_url: raw.string_field("LinkedIn"),
            image_url: raw
                .attachment_url("Member Picture")
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            bio: raw.string_field("Bio"),
            expertise: raw
                .string_field("Expertise")
                .map(|field| parse_expertise(&field)),
            achievements: raw.string_field("Achievements"),
            gender: raw.string_field("Gender"),
        })
    }
}

// A present-but-blank source field still yields Some(vec![]), so
// callers can tell "no data" from "empty list".
fn parse_expertise(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}
