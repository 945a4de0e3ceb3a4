use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TierName {
    Basic,
    Standard,
    Premium,
}

impl TierName {
    pub fn to_str(&self) -> &str {
        match self {
            TierName::Basic => "basic",
            TierName::Standard => "standard",
            TierName::Premium => "premium",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: TierName,
    pub price: f64,
    pub delivery_days: u32,
    pub revisions: u32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// The three packages every gig carries.
///
/// Persisted as a `[basic, standard, premium]` array; decoding rejects any
/// array that does not hold each tier exactly once.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "Vec<PricingTier>", into = "Vec<PricingTier>")]
pub struct GigPricing {
    pub basic: PricingTier,
    pub standard: PricingTier,
    pub premium: PricingTier,
}

impl GigPricing {
    pub fn tier(&self, name: TierName) -> &PricingTier {
        match name {
            TierName::Basic => &self.basic,
            TierName::Standard => &self.standard,
            TierName::Premium => &self.premium,
        }
    }

    pub fn tiers(&self) -> [&PricingTier; 3] {
        [&self.basic, &self.standard, &self.premium]
    }

    /// Cheapest of the three tier prices.
    pub fn starting_price(&self) -> f64 {
        self.tiers()
            .iter()
            .map(|tier| tier.price)
            .fold(f64::INFINITY, f64::min)
    }
}

impl TryFrom<Vec<PricingTier>> for GigPricing {
    type Error = String;

    fn try_from(tiers: Vec<PricingTier>) -> Result<Self, Self::Error> {
        if tiers.len() != 3 {
            return Err(format!("expected 3 pricing tiers, found {}", tiers.len()));
        }

        let mut basic = None;
        let mut standard = None;
        let mut premium = None;

        for tier in tiers {
            let slot = match tier.name {
                TierName::Basic => &mut basic,
                TierName::Standard => &mut standard,
                TierName::Premium => &mut premium,
            };
            if slot.is_some() {
                return Err(format!("duplicate pricing tier: {}", tier.name.to_str()));
            }
            *slot = Some(tier);
        }

        match (basic, standard, premium) {
            (Some(basic), Some(standard), Some(premium)) => Ok(GigPricing {
                basic,
                standard,
                premium,
            }),
            _ => Err("pricing must contain basic, standard and premium tiers".to_string()),
        }
    }
}

impl From<GigPricing> for Vec<PricingTier> {
    fn from(pricing: GigPricing) -> Self {
        vec![pricing.basic, pricing.standard, pricing.premium]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GigAddOn {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<Uuid>,

    #[serde(default)]
    pub images: Vec<String>,
    pub pricing: GigPricing,
    #[serde(default)]
    pub add_ons: Vec<GigAddOn>,
    #[serde(default)]
    pub tags: Vec<String>,

    // Denormalised counters, only ever moved by other operations.
    pub views: u64,
    pub clicks: u64,
    pub orders: u64,
    pub rating: f64,
    pub review_count: u32,

    pub is_active: bool,
    pub is_featured: bool,
    pub is_sponsored: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gig {
    pub fn starting_price(&self) -> f64 {
        self.pricing.starting_price()
    }

    pub fn in_category(&self, category_id: Uuid) -> bool {
        self.category_id == category_id || self.subcategory_id == Some(category_id)
    }

    /// Case-insensitive substring match on title, description or any tag.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn add_on(&self, add_on_id: Uuid) -> Option<&GigAddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == add_on_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(name: TierName, price: f64) -> PricingTier {
        PricingTier {
            name,
            price,
            delivery_days: 3,
            revisions: 1,
            description: format!("{} package", name.to_str()),
            features: vec![],
        }
    }

    #[test]
    fn pricing_decodes_from_tier_array_in_any_order() {
        let tiers = vec![
            tier(TierName::Premium, 300.0),
            tier(TierName::Basic, 100.0),
            tier(TierName::Standard, 200.0),
        ];
        let pricing = GigPricing::try_from(tiers).unwrap();

        assert_eq!(pricing.basic.price, 100.0);
        assert_eq!(pricing.tier(TierName::Premium).price, 300.0);
    }

    #[test]
    fn pricing_rejects_missing_or_duplicate_tiers() {
        let two = vec![tier(TierName::Basic, 1.0), tier(TierName::Standard, 2.0)];
        assert!(GigPricing::try_from(two).is_err());

        let dup = vec![
            tier(TierName::Basic, 1.0),
            tier(TierName::Basic, 2.0),
            tier(TierName::Premium, 3.0),
        ];
        assert!(GigPricing::try_from(dup).is_err());
    }

    #[test]
    fn starting_price_is_cheapest_tier() {
        let pricing = GigPricing {
            basic: tier(TierName::Basic, 80.0),
            standard: tier(TierName::Standard, 45.0),
            premium: tier(TierName::Premium, 120.0),
        };
        assert_eq!(pricing.starting_price(), 45.0);
    }

    #[test]
    fn pricing_serializes_as_named_array() {
        let pricing = GigPricing {
            basic: tier(TierName::Basic, 10.0),
            standard: tier(TierName::Standard, 20.0),
            premium: tier(TierName::Premium, 30.0),
        };
        let json = serde_json::to_value(&pricing).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["basic", "standard", "premium"]);
        assert_eq!(json[0]["deliveryDays"], 3);
    }
}
