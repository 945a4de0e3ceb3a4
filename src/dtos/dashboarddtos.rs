use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStatsDto {
    /// Sum of completed order amounts.
    pub total_earnings: f64,
    pub completed_orders: usize,
    /// Pending or in progress.
    pub active_orders: usize,
    /// Mean of the seller's gig ratings, 0 without gigs.
    pub average_rating: f64,
    pub active_gigs: usize,
    pub total_gigs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerStatsDto {
    pub total_orders: usize,
    pub active_orders: usize,
    pub completed_orders: usize,
    /// Sum over every order the buyer placed, whatever its status.
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsDto {
    pub total_users: usize,
    pub total_gigs: usize,
    pub active_gigs: usize,
    pub total_orders: usize,
    /// Sum of completed order amounts platform-wide.
    pub total_revenue: f64,
    /// Disputes not yet resolved.
    pub active_disputes: usize,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsDto {
    #[validate(range(min = 0.0, max = 1.0, message = "Commission rate must be between 0 and 1"))]
    pub commission_rate: Option<f64>,

    #[validate(range(min = 0.0, message = "Withdrawal fee cannot be negative"))]
    pub withdrawal_fee: Option<f64>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub featured_gig_price: Option<f64>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub sponsored_listing_price: Option<f64>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub pro_subscription_price: Option<f64>,
}
