use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::opinion::{Opinion, OpinionType};

/// Opinion as returned by the JSON API.
#[derive(Serialize, Debug, Clone)]
pub struct ApiOpinionResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub opinion_type: OpinionType,
    pub url: String,
    pub description: String,
    pub locale: String,
    pub manufacturer: String,
    pub device: String,
    pub product: String,
    pub version: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl From<Opinion> for ApiOpinionResponse {
    fn from(o: Opinion) -> Self {
        ApiOpinionResponse {
            id: o.id,
            opinion_type: o.opinion_type,
            url: o.url,
            description: o.description,
            locale: o.locale,
            manufacturer: o.manufacturer,
            device: o.device,
            product: o.product,
            version: o.version,
            platform: o.platform,
            created_at: o.created_at,
        }
    }
}

/// Error body for API endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
}
