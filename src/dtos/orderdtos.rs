use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{gigmodel::TierName, ordermodel::OrderStatus};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderDto {
    pub gig_id: Uuid,
    pub pricing_tier: TierName,

    /// Ids of the gig's add-ons the buyer picked.
    #[serde(default)]
    pub add_on_ids: Vec<Uuid>,

    #[validate(length(max = 5000, message = "Requirements are too long"))]
    #[serde(default)]
    pub requirements: Option<String>,
}

impl PlaceOrderDto {
    pub fn new(gig_id: Uuid, pricing_tier: TierName) -> Self {
        PlaceOrderDto {
            gig_id,
            pricing_tier,
            add_on_ids: Vec::new(),
            requirements: None,
        }
    }
}

/// Partial order update. Any status may be set from any status.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    pub status: Option<OrderStatus>,
    pub requirements: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub delivered_files: Option<Vec<String>>,
    pub delivery_note: Option<String>,
}

impl UpdateOrderDto {
    pub fn status(status: OrderStatus) -> Self {
        UpdateOrderDto {
            status: Some(status),
            ..Default::default()
        }
    }
}
