use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiseDisputeDto {
    pub order_id: Uuid,

    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDisputeDto {
    #[validate(length(min = 1, message = "Resolution is required"))]
    pub resolution: String,

    #[validate(range(min = 0.0, message = "Refund cannot be negative"))]
    #[serde(default)]
    pub refund_amount: Option<f64>,
}
