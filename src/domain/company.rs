use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub website: String,
    pub description: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
    #[serde(rename = "foundingYear")]
    pub founding_year: i32,
    pub category: Vec<String>,
    pub founders: Vec<Founder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub batch: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
