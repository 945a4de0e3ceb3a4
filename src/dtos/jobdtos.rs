use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::jobmodels::JobOfferStatus;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequestDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: f64,

    pub category_id: Uuid,
    pub deadline: DateTime<Utc>,

    #[serde(default)]
    pub invited_sellers: Vec<Uuid>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobOfferDto {
    pub job_request_id: Uuid,

    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: f64,

    #[validate(range(min = 1, message = "Delivery time must be at least one day"))]
    pub delivery_days: u32,

    #[validate(length(min = 1, message = "Proposal is required"))]
    pub proposal: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobOfferDto {
    pub status: Option<JobOfferStatus>,

    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: Option<f64>,

    #[validate(range(min = 1, message = "Delivery time must be at least one day"))]
    pub delivery_days: Option<u32>,

    #[validate(length(min = 1, message = "Proposal is required"))]
    pub proposal: Option<String>,
}
