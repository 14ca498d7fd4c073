use serde::Deserialize;
use serde_json::Number;

/// The static dataset document: `{"members": [...], "experiences": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDocument {
    pub members: Vec<Member>,
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(alias = "memberId")]
    pub member_id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub past_redeemed_offers: Vec<RedeemedOffer>,
    #[serde(default)]
    pub card_transactions: Vec<CardTransaction>,
}

/// A past redemption. Only the experience reference is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RedeemedOffer {
    pub experience_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardTransaction {
    pub merchant_name: String,
    pub category: String,
    /// Kept as the stored JSON number so `40` and `40.0` render as written.
    pub amount: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub experience_id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Experience {
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }
}
