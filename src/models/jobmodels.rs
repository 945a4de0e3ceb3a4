use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobRequestStatus {
    Open,
    Closed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobOfferStatus {
    Pending,
    Accepted,
    Rejected,
}

impl JobOfferStatus {
    pub fn to_str(&self) -> &str {
        match self {
            JobOfferStatus::Pending => "pending",
            JobOfferStatus::Accepted => "accepted",
            JobOfferStatus::Rejected => "rejected",
        }
    }
}

/// A buyer's open brief that sellers can bid on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub category_id: Uuid,
    pub deadline: DateTime<Utc>,

    #[serde(default)]
    pub invited_sellers: Vec<Uuid>,

    pub status: JobRequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    pub id: Uuid,
    pub job_request_id: Uuid,
    pub seller_id: Uuid,
    pub amount: f64,
    pub delivery_days: u32,
    pub proposal: String,
    pub status: JobOfferStatus,
    pub created_at: DateTime<Utc>,
}
