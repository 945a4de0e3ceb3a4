use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub order_id: Uuid,
    pub gig_id: Uuid,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Mean rating and count over a set of reviews; `(0.0, 0)` when empty.
pub fn rating_summary(reviews: &[Review]) -> (f64, u32) {
    if reviews.is_empty() {
        return (0.0, 0);
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let count = reviews.len() as u32;
    (f64::from(total) / f64::from(count), count)
}
