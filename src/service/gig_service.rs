// service/gig_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{categorydb::CategoryExt, db::DBClient, gigdb::GigExt, reviewdb::ReviewExt, userdb::UserExt},
    dtos::{
        gigdtos::{CreateGigDto, GigAddOnDto, GigDetailsDto, GigFilterDto, GigSort, UpdateGigDto},
        userdtos::FilterUserDto,
    },
    models::{gigmodel::Gig, sessionmodel::Session},
    service::error::ServiceError,
    utils::slug::slugify,
};

pub const FEATURED_LIMIT: usize = 8;

/// Applies a listing filter to gigs in collection order.
///
/// Only active gigs survive. Sorting is stable, so ties keep collection order.
pub fn filter_gigs(gigs: Vec<Gig>, filter: &GigFilterDto) -> Vec<Gig> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_lowercase);
    let min_rating = filter.min_rating.filter(|rating| *rating > 0.0);

    let mut matched: Vec<Gig> = gigs
        .into_iter()
        .filter(|gig| gig.is_active)
        .filter(|gig| filter.category_id.map_or(true, |id| gig.in_category(id)))
        .filter(|gig| filter.min_price.map_or(true, |min| gig.starting_price() >= min))
        .filter(|gig| filter.max_price.map_or(true, |max| gig.starting_price() <= max))
        .filter(|gig| min_rating.map_or(true, |min| gig.rating >= min))
        .filter(|gig| needle.as_deref().map_or(true, |needle| gig.matches_search(needle)))
        .collect();

    match filter.sort {
        GigSort::Relevance => {}
        GigSort::PriceLow => matched.sort_by(|a, b| a.starting_price().total_cmp(&b.starting_price())),
        GigSort::PriceHigh => matched.sort_by(|a, b| b.starting_price().total_cmp(&a.starting_price())),
        GigSort::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        GigSort::Popular => matched.sort_by(|a, b| b.orders.cmp(&a.orders)),
    }

    matched
}

#[derive(Debug, Clone)]
pub struct GigService {
    db_client: Arc<DBClient>,
}

impl GigService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn list_gigs(&self, filter: &GigFilterDto) -> Result<Vec<Gig>, ServiceError> {
        let gigs = self.db_client.get_gigs().await?;
        let matched = filter_gigs(gigs, filter);
        tracing::debug!("Gig listing matched {} gigs", matched.len());
        Ok(matched)
    }

    /// Fetches a gig for display, counting the view.
    pub async fn get_gig(&self, gig_id: Uuid) -> Result<Gig, ServiceError> {
        self.db_client
            .increment_gig_views(gig_id)
            .await?
            .ok_or(ServiceError::GigNotFound(gig_id))
    }

    pub async fn gig_details(&self, gig_id: Uuid) -> Result<GigDetailsDto, ServiceError> {
        let gig = self.get_gig(gig_id).await?;
        let seller = self
            .db_client
            .get_user(gig.seller_id)
            .await?
            .map(|seller| FilterUserDto::filter_user(&seller));
        let reviews = self.db_client.get_reviews_by_gig(gig_id).await?;

        Ok(GigDetailsDto { gig, seller, reviews })
    }

    pub async fn record_click(&self, gig_id: Uuid) -> Result<Gig, ServiceError> {
        self.db_client
            .increment_gig_clicks(gig_id)
            .await?
            .ok_or(ServiceError::GigNotFound(gig_id))
    }

    pub async fn get_gigs_by_seller(&self, seller_id: Uuid) -> Result<Vec<Gig>, ServiceError> {
        Ok(self.db_client.get_gigs_by_seller(seller_id).await?)
    }

    pub async fn get_featured(&self) -> Result<Vec<Gig>, ServiceError> {
        let gigs = self.db_client.get_gigs().await?;
        Ok(gigs
            .into_iter()
            .filter(|gig| gig.is_active && gig.is_featured)
            .take(FEATURED_LIMIT)
            .collect())
    }

    pub async fn create_gig(&self, session: &Session, dto: CreateGigDto) -> Result<Gig, ServiceError> {
        if !session.role.can_sell() {
            tracing::warn!("User {} tried to publish a gig as a {}", session.user_id, session.role.to_str());
            return Err(ServiceError::forbidden("only sellers can publish gigs"));
        }
        dto.validate()?;
        self.ensure_category(dto.category_id).await?;
        if let Some(subcategory_id) = dto.subcategory_id {
            self.ensure_category(subcategory_id).await?;
        }

        let now = Utc::now();
        let gig = Gig {
            id: Uuid::new_v4(),
            seller_id: session.user_id,
            slug: slugify(&dto.title),
            title: dto.title,
            description: dto.description,
            category_id: dto.category_id,
            subcategory_id: dto.subcategory_id,
            images: dto.images,
            pricing: dto.pricing,
            add_ons: dto.add_ons.into_iter().map(GigAddOnDto::into_add_on).collect(),
            tags: dto.tags,
            views: 0,
            clicks: 0,
            orders: 0,
            rating: 0.0,
            review_count: 0,
            is_active: dto.is_active,
            is_featured: false,
            is_sponsored: false,
            created_at: now,
            updated_at: now,
        };

        let gig = self.db_client.save_gig(gig).await?;
        tracing::info!("📦 Gig '{}' published by {}", gig.slug, gig.seller_id);
        Ok(gig)
    }

    pub async fn update_gig(
        &self,
        session: &Session,
        gig_id: Uuid,
        dto: UpdateGigDto,
    ) -> Result<Gig, ServiceError> {
        let gig = self.owned_gig(session, gig_id).await?;
        dto.validate()?;
        if let Some(category_id) = dto.category_id {
            self.ensure_category(category_id).await?;
        }
        if let Some(subcategory_id) = dto.subcategory_id {
            self.ensure_category(subcategory_id).await?;
        }

        let updated = self.db_client.update_gig(gig.id, dto).await?;
        tracing::info!("Gig {} updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_gig(&self, session: &Session, gig_id: Uuid) -> Result<(), ServiceError> {
        let gig = self.owned_gig(session, gig_id).await?;
        if !self.db_client.delete_gig(gig.id).await? {
            return Err(ServiceError::GigNotFound(gig_id));
        }
        tracing::info!("🗑️ Gig {} deleted by {}", gig_id, session.user_id);
        Ok(())
    }

    async fn owned_gig(&self, session: &Session, gig_id: Uuid) -> Result<Gig, ServiceError> {
        let gig = self
            .db_client
            .get_gig(gig_id)
            .await?
            .ok_or(ServiceError::GigNotFound(gig_id))?;

        if !session.can_manage(gig.seller_id) {
            tracing::warn!("User {} tried to modify gig {} they do not own", session.user_id, gig_id);
            return Err(ServiceError::forbidden("only the gig owner can change it"));
        }
        Ok(gig)
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<(), ServiceError> {
        self.db_client
            .get_category(category_id)
            .await?
            .map(|_| ())
            .ok_or(ServiceError::CategoryNotFound(category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::usermodel::UserRole;
    use crate::service::{seed, testutil};

    fn rated(mut gig: Gig, rating: f64, orders: u64) -> Gig {
        gig.rating = rating;
        gig.orders = orders;
        gig
    }

    fn titles(gigs: &[Gig]) -> Vec<&str> {
        gigs.iter().map(|gig| gig.title.as_str()).collect()
    }

    fn catalogue() -> Vec<Gig> {
        let seller = Uuid::new_v4();
        let mut inactive = testutil::gig(seller, "Hidden", [60.0, 70.0, 80.0]);
        inactive.is_active = false;
        let mut tagged = testutil::gig(seller, "Mobile app", [120.0, 200.0, 400.0]);
        tagged.tags = vec!["Flutter".to_string()];

        vec![
            rated(testutil::gig(seller, "Logo design", [40.0, 80.0, 150.0]), 4.8, 12),
            rated(testutil::gig(seller, "Landing page", [75.0, 50.0, 300.0]), 3.9, 30),
            rated(testutil::gig(seller, "SEO audit", [100.0, 150.0, 200.0]), 4.0, 3),
            rated(tagged, 0.0, 0),
            rated(inactive, 5.0, 99),
        ]
    }

    #[test]
    fn price_range_uses_the_cheapest_tier() {
        let filter = GigFilterDto {
            min_price: Some(50.0),
            max_price: Some(100.0),
            ..Default::default()
        };
        let matched = filter_gigs(catalogue(), &filter);

        assert_eq!(titles(&matched), vec!["Landing page", "SEO audit"]);
        assert!(matched
            .iter()
            .all(|gig| (50.0..=100.0).contains(&gig.starting_price())));
    }

    #[test]
    fn min_rating_of_zero_means_no_filter() {
        let none = GigFilterDto {
            min_rating: Some(0.0),
            ..Default::default()
        };
        assert_eq!(filter_gigs(catalogue(), &none).len(), 4);

        let four = GigFilterDto {
            min_rating: Some(4.0),
            ..Default::default()
        };
        let matched = filter_gigs(catalogue(), &four);
        assert_eq!(titles(&matched), vec!["Logo design", "SEO audit"]);
        assert!(matched.iter().all(|gig| gig.rating >= 4.0));
    }

    #[test]
    fn search_is_case_insensitive_across_title_description_and_tags() {
        let by_tag = GigFilterDto {
            search: Some("flutter".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&filter_gigs(catalogue(), &by_tag)), vec!["Mobile app"]);

        let by_title = GigFilterDto {
            search: Some("  LOGO ".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&filter_gigs(catalogue(), &by_title)), vec!["Logo design"]);

        let blank = GigFilterDto {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_gigs(catalogue(), &blank).len(), 4);
    }

    #[test]
    fn category_matches_primary_or_subcategory() {
        let mut gigs = catalogue();
        let category = Uuid::new_v4();
        gigs[0].category_id = category;
        gigs[2].subcategory_id = Some(category);

        let filter = GigFilterDto {
            category_id: Some(category),
            ..Default::default()
        };
        assert_eq!(titles(&filter_gigs(gigs, &filter)), vec!["Logo design", "SEO audit"]);
    }

    #[test]
    fn sorts_are_stable() {
        let sorted = |sort: GigSort| {
            let filter = GigFilterDto {
                sort,
                ..Default::default()
            };
            filter_gigs(catalogue(), &filter)
                .into_iter()
                .map(|gig| gig.title)
                .collect::<Vec<_>>()
        };

        assert_eq!(sorted(GigSort::PriceLow), ["Logo design", "Landing page", "SEO audit", "Mobile app"]);
        assert_eq!(sorted(GigSort::PriceHigh), ["Mobile app", "SEO audit", "Landing page", "Logo design"]);
        assert_eq!(sorted(GigSort::Rating), ["Logo design", "SEO audit", "Landing page", "Mobile app"]);
        assert_eq!(sorted(GigSort::Popular), ["Landing page", "Logo design", "SEO audit", "Mobile app"]);
        assert_eq!(sorted(GigSort::Relevance), ["Logo design", "Landing page", "SEO audit", "Mobile app"]);
    }

    #[tokio::test]
    async fn create_gig_slugs_the_title_and_zeroes_counters() {
        let db = testutil::db();
        let category = seed::seed_categories(&db).await.unwrap()[0].clone();
        let (_, seller) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let service = GigService::new(db);

        let gig = service
            .create_gig(&seller, testutil::create_gig_dto("I will build your API!", category.id, [50.0, 90.0, 150.0]))
            .await
            .unwrap();

        assert_eq!(gig.slug, "i-will-build-your-api");
        assert_eq!(gig.seller_id, seller.user_id);
        assert_eq!((gig.views, gig.clicks, gig.orders, gig.review_count), (0, 0, 0, 0));
        assert_eq!(gig.rating, 0.0);
        assert!(gig.is_active);
    }

    #[tokio::test]
    async fn buyers_cannot_publish_and_unknown_categories_are_rejected() {
        let db = testutil::db();
        let category = seed::seed_categories(&db).await.unwrap()[0].clone();
        let (_, buyer) = testutil::member(&db, UserRole::Buyer, "Bea").await;
        let (_, seller) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let service = GigService::new(db);

        let as_buyer = service
            .create_gig(&buyer, testutil::create_gig_dto("Logo", category.id, [10.0, 20.0, 30.0]))
            .await;
        assert!(matches!(as_buyer, Err(ServiceError::Forbidden(_))));

        let nowhere = service
            .create_gig(&seller, testutil::create_gig_dto("Logo", Uuid::new_v4(), [10.0, 20.0, 30.0]))
            .await;
        assert!(matches!(nowhere, Err(ServiceError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn non_positive_tier_price_fails_validation() {
        let db = testutil::db();
        let category = seed::seed_categories(&db).await.unwrap()[0].clone();
        let (_, seller) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let service = GigService::new(db);

        let result = service
            .create_gig(&seller, testutil::create_gig_dto("Logo", category.id, [0.0, 20.0, 30.0]))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn only_owner_or_admin_can_update_or_delete() {
        let db = testutil::db();
        let (owner, owner_session) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let (_, rival) = testutil::member(&db, UserRole::Seller, "Rita").await;
        let (_, admin) = testutil::member(&db, UserRole::Admin, "Root").await;
        let gig = testutil::save_gig(&db, testutil::gig(owner.id, "Logo design", [40.0, 80.0, 150.0])).await;
        let service = GigService::new(db);

        let retitle = UpdateGigDto {
            title: Some("Brand identity pack".to_string()),
            ..Default::default()
        };
        let denied = service.update_gig(&rival, gig.id, retitle.clone()).await;
        assert!(matches!(denied, Err(ServiceError::Forbidden(_))));

        let updated = service.update_gig(&owner_session, gig.id, retitle).await.unwrap();
        assert_eq!(updated.slug, "brand-identity-pack");
        assert!(updated.updated_at >= gig.updated_at);

        assert!(matches!(
            service.delete_gig(&rival, gig.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        service.delete_gig(&admin, gig.id).await.unwrap();
        assert!(service.get_gig(gig.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn views_and_clicks_are_counted() {
        let db = testutil::db();
        let (seller, _) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let gig = testutil::save_gig(&db, testutil::gig(seller.id, "Logo design", [40.0, 80.0, 150.0])).await;
        let service = GigService::new(db);

        service.get_gig(gig.id).await.unwrap();
        let details = service.gig_details(gig.id).await.unwrap();
        let clicked = service.record_click(gig.id).await.unwrap();

        assert_eq!(details.gig.views, 2);
        assert_eq!(details.seller.map(|s| s.name), Some("Sam".to_string()));
        assert!(details.reviews.is_empty());
        assert_eq!(clicked.clicks, 1);
    }

    #[tokio::test]
    async fn featured_is_capped_at_eight_active_gigs() {
        let db = testutil::db();
        let seller = Uuid::new_v4();
        for n in 0..10 {
            let mut gig = testutil::gig(seller, &format!("Featured {n}"), [10.0, 20.0, 30.0]);
            gig.is_featured = true;
            gig.is_active = n != 0;
            testutil::save_gig(&db, gig).await;
        }
        testutil::save_gig(&db, testutil::gig(seller, "Plain", [10.0, 20.0, 30.0])).await;
        let service = GigService::new(db);

        let featured = service.get_featured().await.unwrap();
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert_eq!(featured[0].title, "Featured 1");
        assert!(featured.iter().all(|gig| gig.is_active && gig.is_featured));
    }
}
