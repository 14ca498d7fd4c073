use serde::{Deserialize, Serialize};

/// A single recommended experience as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub title: String,
    pub category: String,
    pub explanation: String,
}

/// The structured shape the model is asked to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
}

/// Successful response body of `GET /recommendations/:member_id`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub member_id: String,
    pub recommendations: Vec<Recommendation>,
}
