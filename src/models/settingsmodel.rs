use serde::{Deserialize, Serialize};

/// Flat platform configuration. Stored, displayed and edited by admins; no
/// pricing logic reads the commission or listing prices.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    pub commission_rate: f64,
    /// Flat fee taken from every withdrawal.
    pub withdrawal_fee: f64,
    pub featured_gig_price: f64,
    pub sponsored_listing_price: f64,
    pub pro_subscription_price: f64,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        PlatformSettings {
            commission_rate: 0.15,
            withdrawal_fee: 2.5,
            featured_gig_price: 50.0,
            sponsored_listing_price: 100.0,
            pro_subscription_price: 29.99,
        }
    }
}
