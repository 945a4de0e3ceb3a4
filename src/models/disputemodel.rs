use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    InReview,
    Resolved,
}

impl DisputeStatus {
    pub fn to_str(&self) -> &str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::InReview => "in_review",
            DisputeStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: Uuid,
    pub order_id: Uuid,
    pub raised_by: Uuid,
    pub reason: String,
    pub description: String,

    #[serde(default)]
    pub evidence: Vec<String>,

    pub status: DisputeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<f64>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Dispute {
    pub fn is_unresolved(&self) -> bool {
        self.status != DisputeStatus::Resolved
    }
}
