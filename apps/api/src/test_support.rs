//! Shared fixtures for unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::dataset::DatasetIndex;
use crate::llm_client::{CompletionRequest, LlmError, ModelCapability};

pub const FIXTURE_DATASET: &str = r#"{
    "members": [
        {
            "member_id": "M001",
            "name": "Ava",
            "location": "London",
            "past_redeemed_offers": [{"experience_id": "E1"}],
            "card_transactions": [
                {"merchant_name": "Cafe X", "category": "Food", "amount": 12.5}
            ]
        },
        {
            "member_id": "M002",
            "name": "Ben",
            "location": "Leeds",
            "past_redeemed_offers": [
                {"experience_id": "E2"},
                {"experience_id": "E404"},
                {"experience_id": "E2"}
            ],
            "card_transactions": [
                {"merchant_name": "Gym Co", "category": "Fitness", "amount": 40},
                {"merchant_name": "Book Nook", "category": "Books", "amount": 9.99}
            ]
        },
        {"member_id": "M003", "name": "Cleo", "location": "Bath"}
    ],
    "experiences": [
        {"experience_id": "E1", "title": "Spa Day", "category": "Wellness"},
        {"experience_id": "E2", "title": "Cooking Class", "category": "Food"}
    ]
}"#;

pub fn fixture_index() -> Arc<DatasetIndex> {
    Arc::new(DatasetIndex::from_json_str(FIXTURE_DATASET).expect("fixture dataset parses"))
}

pub const VALID_REPLY: &str = r#"{
    "recommendations": [
        {"title": "Cooking Class", "category": "Food", "explanation": "You eat out often."},
        {"title": "Spa Day", "category": "Wellness", "explanation": "Time to unwind."}
    ]
}"#;

/// Model double that records every call and answers with a canned reply.
pub struct FakeModel {
    reply: Option<String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl FakeModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// A model whose every call fails as an upstream error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system, prompt)` of the most recent call.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelCapability for FakeModel {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() =
            Some((request.system.to_string(), request.prompt.to_string()));

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}
