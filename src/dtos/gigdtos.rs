use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    dtos::userdtos::FilterUserDto,
    models::{
        gigmodel::{Gig, GigAddOn, GigPricing},
        reviewmodel::Review,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigAddOnDto {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub delivery_days: Option<u32>,
}

impl GigAddOnDto {
    pub fn into_add_on(self) -> GigAddOn {
        GigAddOn {
            id: Uuid::new_v4(),
            name: self.name,
            price: self.price,
            delivery_days: self.delivery_days,
        }
    }
}

/// Longest delivery time a tier or add-on may promise.
pub const MAX_DELIVERY_DAYS: u32 = 365;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_pricing(pricing: &GigPricing) -> Result<(), ValidationError> {
    for tier in pricing.tiers() {
        if !(tier.price > 0.0) {
            return Err(invalid("tier_price", "Every pricing tier needs a positive price"));
        }
        if !(1..=MAX_DELIVERY_DAYS).contains(&tier.delivery_days) {
            return Err(invalid("tier_delivery", "Delivery time must be between 1 and 365 days"));
        }
    }
    Ok(())
}

fn validate_add_ons(add_ons: &Vec<GigAddOnDto>) -> Result<(), ValidationError> {
    for add_on in add_ons {
        if add_on.name.trim().is_empty() {
            return Err(invalid("add_on_name", "Add-on name is required"));
        }
        if add_on.price < 0.0 {
            return Err(invalid("add_on_price", "Add-on price cannot be negative"));
        }
        if add_on.delivery_days.is_some_and(|days| days > MAX_DELIVERY_DAYS) {
            return Err(invalid("add_on_delivery", "Add-on delivery time cannot exceed 365 days"));
        }
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGigDto {
    #[validate(length(min = 1, max = 120, message = "Title is required (max 120 characters)"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub category_id: Uuid,

    #[serde(default)]
    pub subcategory_id: Option<Uuid>,

    #[serde(default)]
    pub images: Vec<String>,

    #[validate(custom = "validate_pricing")]
    pub pricing: GigPricing,

    #[serde(default)]
    #[validate(custom = "validate_add_ons")]
    pub add_ons: Vec<GigAddOnDto>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGigDto {
    #[validate(length(min = 1, max = 120, message = "Title is required (max 120 characters)"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub images: Option<Vec<String>>,

    #[validate(custom = "validate_pricing")]
    pub pricing: Option<GigPricing>,

    #[validate(custom = "validate_add_ons")]
    pub add_ons: Option<Vec<GigAddOnDto>>,

    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_sponsored: Option<bool>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GigSort {
    /// Collection order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Popular,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigFilterDto {
    pub category_id: Option<Uuid>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: GigSort,
}

/// Everything the gig detail view shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigDetailsDto {
    pub gig: Gig,
    pub seller: Option<FilterUserDto>,
    pub reviews: Vec<Review>,
}
