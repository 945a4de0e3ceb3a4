use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

impl UserRole {
    pub fn to_str(&self) -> &str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
            UserRole::Admin => "admin",
        }
    }

    /// Sellers and admins may publish gigs.
    pub fn can_sell(&self) -> bool {
        matches!(self, UserRole::Seller | UserRole::Admin)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SellerLevel {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "pro")]
    Pro,
}

impl SellerLevel {
    pub fn to_str(&self) -> &str {
        match self {
            SellerLevel::Beginner => "beginner",
            SellerLevel::Level1 => "level_1",
            SellerLevel::Level2 => "level_2",
            SellerLevel::Pro => "pro",
        }
    }

    /// Level earned for a number of completed orders.
    pub fn for_completed_orders(completed: u32) -> Self {
        match completed {
            0..=9 => SellerLevel::Beginner,
            10..=49 => SellerLevel::Level1,
            50..=99 => SellerLevel::Level2,
            _ => SellerLevel::Pro,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// argon2 PHC string
    pub password: String,
    pub role: UserRole,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub email_verified: bool,
    pub phone_verified: bool,
    pub two_factor_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_level: Option<SellerLevel>,

    /// Percentage of closed orders that ended `completed`.
    #[serde(default)]
    pub success_score: f64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub total_orders: u32,

    pub joined_at: DateTime<Utc>,

    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub vacation_mode: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Seller performance fields, recomputed from the seller's orders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellerPerformance {
    pub total_orders: u32,
    pub total_earnings: f64,
    pub success_score: f64,
    pub seller_level: SellerLevel,
}
