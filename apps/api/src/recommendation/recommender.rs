//! Recommendation Orchestrator: member id in, structured recommendations out.
//!
//! One request is strictly sequential: dataset lookups, prompt rendering, then a
//! single model call. Nothing is cached between requests.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::dataset::DatasetIndex;
use crate::errors::AppError;
use crate::llm_client::prompts::STRUCTURED_OUTPUT_INSTRUCTION;
use crate::llm_client::{CompletionRequest, LlmError, ModelCapability};
use crate::models::recommendation::{Recommendations, RecommendationsResponse};
use crate::recommendation::prompt_builder::build_prompt;
use crate::recommendation::prompts::RECOMMENDATION_SYSTEM_TEMPLATE;

pub const MEMBER_NOT_FOUND: &str = "Member not found";
const SCHEMA_NAME: &str = "Recommendations";
const TEMPERATURE: f32 = 0.7;

pub struct Recommender {
    index: Arc<DatasetIndex>,
    model: Arc<dyn ModelCapability>,
    system_message: String,
    schema: Value,
}

impl Recommender {
    pub fn new(index: Arc<DatasetIndex>, model: Arc<dyn ModelCapability>) -> Self {
        Self {
            index,
            model,
            system_message: system_message(),
            schema: recommendations_schema(),
        }
    }

    /// Builds the member prompt, asks the model for recommendations and
    /// validates the reply. Unknown members never reach the model.
    pub async fn get_recommendations(
        &self,
        member_id: &str,
    ) -> Result<RecommendationsResponse, AppError> {
        let prompt = build_prompt(&self.index, member_id)
            .ok_or_else(|| AppError::NotFound(MEMBER_NOT_FOUND.to_string()))?;

        info!("Requesting recommendations for member {member_id}");
        debug!("Recommendation prompt for member {member_id}:\n{prompt}");

        let request = CompletionRequest {
            system: &self.system_message,
            prompt: &prompt,
            schema_name: SCHEMA_NAME,
            schema: &self.schema,
            temperature: TEMPERATURE,
        };
        let raw = self.model.complete(&request).await?;
        let parsed = parse_recommendations(&raw)?;

        info!(
            "Model returned {} recommendations for member {member_id}",
            parsed.recommendations.len()
        );

        Ok(RecommendationsResponse {
            member_id: member_id.to_string(),
            recommendations: parsed.recommendations,
        })
    }
}

/// Strictly decodes the model reply; any shape mismatch is an upstream failure.
pub fn parse_recommendations(raw: &str) -> Result<Recommendations, LlmError> {
    serde_json::from_str(raw).map_err(LlmError::Parse)
}

pub fn system_message() -> String {
    RECOMMENDATION_SYSTEM_TEMPLATE
        .replace("{structured_output_instruction}", STRUCTURED_OUTPUT_INSTRUCTION)
}

/// JSON schema of `Recommendations`, in the strict form structured outputs require.
pub fn recommendations_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string"},
                        "category": {"type": "string"},
                        "explanation": {"type": "string"}
                    },
                    "required": ["title", "category", "explanation"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["recommendations"],
        "additionalProperties": false
    })
}
