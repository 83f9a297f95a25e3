use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::DecodeError;

/// A market-analysis article as the REST API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisPost {
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(DecodeError::Post)
    }

    pub fn list_from_json(body: &str) -> Result<Vec<Self>, DecodeError> {
        serde_json::from_str(body).map_err(DecodeError::Post)
    }
}
