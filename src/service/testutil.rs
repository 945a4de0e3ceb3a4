// Fixtures shared by the service test suites.
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::{db::DBClient, gigdb::GigExt, userdb::UserExt},
    dtos::gigdtos::CreateGigDto,
    models::{
        gigmodel::{Gig, GigAddOn, GigPricing, PricingTier, TierName},
        sessionmodel::Session,
        usermodel::{SellerLevel, User, UserRole},
    },
};

pub fn db() -> Arc<DBClient> {
    Arc::new(DBClient::in_memory())
}

pub fn user(role: UserRole, name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "unused".to_string(),
        role,
        name: name.to_string(),
        avatar: None,
        bio: None,
        skills: vec![],
        phone: None,
        email_verified: false,
        phone_verified: false,
        two_factor_enabled: false,
        seller_level: (role == UserRole::Seller).then_some(SellerLevel::Beginner),
        success_score: 0.0,
        total_earnings: 0.0,
        total_orders: 0,
        joined_at: Utc::now(),
        is_online: false,
        vacation_mode: false,
    }
}

/// Persists a user and returns it with a session acting as them.
pub async fn member(db: &DBClient, role: UserRole, name: &str) -> (User, Session) {
    let user = db.save_user(user(role, name)).await.unwrap();
    let session = Session::for_user(&user);
    (user, session)
}

pub fn tier(name: TierName, price: f64, delivery_days: u32) -> PricingTier {
    PricingTier {
        name,
        price,
        delivery_days,
        revisions: 1,
        description: format!("{} package", name.to_str()),
        features: vec![],
    }
}

/// Basic/standard/premium at the given prices, delivered in 2, 4 and 7 days.
pub fn pricing(prices: [f64; 3]) -> GigPricing {
    GigPricing {
        basic: tier(TierName::Basic, prices[0], 2),
        standard: tier(TierName::Standard, prices[1], 4),
        premium: tier(TierName::Premium, prices[2], 7),
    }
}

pub fn create_gig_dto(title: &str, category_id: Uuid, prices: [f64; 3]) -> CreateGigDto {
    CreateGigDto {
        title: title.to_string(),
        description: format!("{} description", title),
        category_id,
        subcategory_id: None,
        images: vec![],
        pricing: pricing(prices),
        add_ons: vec![],
        tags: vec![],
        is_active: true,
    }
}

pub fn gig(seller_id: Uuid, title: &str, prices: [f64; 3]) -> Gig {
    let now = Utc::now();
    Gig {
        id: Uuid::new_v4(),
        seller_id,
        title: title.to_string(),
        slug: crate::utils::slug::slugify(title),
        description: format!("{} description", title),
        category_id: Uuid::new_v4(),
        subcategory_id: None,
        images: vec![],
        pricing: pricing(prices),
        add_ons: vec![],
        tags: vec![],
        views: 0,
        clicks: 0,
        orders: 0,
        rating: 0.0,
        review_count: 0,
        is_active: true,
        is_featured: false,
        is_sponsored: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn add_on(name: &str, price: f64, delivery_days: Option<u32>) -> GigAddOn {
    GigAddOn {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price,
        delivery_days,
    }
}

pub async fn save_gig(db: &DBClient, gig: Gig) -> Gig {
    db.save_gig(gig).await.unwrap()
}
