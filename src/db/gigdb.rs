// db/gigdb.rs
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::dtos::gigdtos::{GigAddOnDto, UpdateGigDto};
use crate::models::gigmodel::Gig;
use crate::utils::slug::slugify;

impl Record for Gig {
    const COLLECTION: &'static str = keys::GIGS;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy)]
enum GigCounter {
    Views,
    Clicks,
    Orders,
}

#[async_trait]
pub trait GigExt {
    async fn get_gigs(&self) -> Result<Vec<Gig>, StorageError>;

    async fn get_gig(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError>;

    async fn get_gigs_by_seller(&self, seller_id: Uuid) -> Result<Vec<Gig>, StorageError>;

    async fn save_gig(&self, gig: Gig) -> Result<Gig, StorageError>;

    async fn update_gig(&self, gig_id: Uuid, changes: UpdateGigDto) -> Result<Gig, StorageError>;

    async fn delete_gig(&self, gig_id: Uuid) -> Result<bool, StorageError>;

    async fn increment_gig_views(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError>;

    async fn increment_gig_clicks(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError>;

    async fn increment_gig_orders(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError>;

    async fn update_gig_rating(
        &self,
        gig_id: Uuid,
        rating: f64,
        review_count: u32,
    ) -> Result<Gig, StorageError>;
}

impl DBClient {
    async fn bump_gig_counter(
        &self,
        gig_id: Uuid,
        counter: GigCounter,
    ) -> Result<Option<Gig>, StorageError> {
        self.mutate(move |gigs: &mut Collection<Gig>| {
            let bumped = gigs.get_mut(&gig_id).map(|gig| {
                match counter {
                    GigCounter::Views => gig.views += 1,
                    GigCounter::Clicks => gig.clicks += 1,
                    GigCounter::Orders => gig.orders += 1,
                }
                gig.clone()
            });
            Ok::<_, StorageError>(bumped)
        })
        .await
    }
}

#[async_trait]
impl GigExt for DBClient {
    async fn get_gigs(&self) -> Result<Vec<Gig>, StorageError> {
        Ok(self.load::<Gig>().await?.into_vec())
    }

    async fn get_gig(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError> {
        Ok(self.load::<Gig>().await?.get(&gig_id).cloned())
    }

    async fn get_gigs_by_seller(&self, seller_id: Uuid) -> Result<Vec<Gig>, StorageError> {
        let gigs = self.load::<Gig>().await?;
        Ok(gigs.filter(|gig| gig.seller_id == seller_id))
    }

    async fn save_gig(&self, gig: Gig) -> Result<Gig, StorageError> {
        self.mutate(move |gigs: &mut Collection<Gig>| {
            gigs.insert(gig.clone());
            Ok::<_, StorageError>(gig)
        })
        .await
    }

    async fn update_gig(&self, gig_id: Uuid, changes: UpdateGigDto) -> Result<Gig, StorageError> {
        self.mutate(move |gigs: &mut Collection<Gig>| {
            gigs.update(gig_id, |gig| {
                if let Some(title) = changes.title {
                    gig.slug = slugify(&title);
                    gig.title = title;
                }
                if let Some(description) = changes.description {
                    gig.description = description;
                }
                if let Some(category_id) = changes.category_id {
                    gig.category_id = category_id;
                }
                if let Some(subcategory_id) = changes.subcategory_id {
                    gig.subcategory_id = Some(subcategory_id);
                }
                if let Some(images) = changes.images {
                    gig.images = images;
                }
                if let Some(pricing) = changes.pricing {
                    gig.pricing = pricing;
                }
                if let Some(add_ons) = changes.add_ons {
                    gig.add_ons = add_ons.into_iter().map(GigAddOnDto::into_add_on).collect();
                }
                if let Some(tags) = changes.tags {
                    gig.tags = tags;
                }
                if let Some(is_active) = changes.is_active {
                    gig.is_active = is_active;
                }
                if let Some(is_featured) = changes.is_featured {
                    gig.is_featured = is_featured;
                }
                if let Some(is_sponsored) = changes.is_sponsored {
                    gig.is_sponsored = is_sponsored;
                }
                gig.updated_at = Utc::now();
            })
        })
        .await
    }

    async fn delete_gig(&self, gig_id: Uuid) -> Result<bool, StorageError> {
        self.mutate(move |gigs: &mut Collection<Gig>| {
            Ok::<_, StorageError>(gigs.remove(&gig_id).is_some())
        })
        .await
    }

    async fn increment_gig_views(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError> {
        self.bump_gig_counter(gig_id, GigCounter::Views).await
    }

    async fn increment_gig_clicks(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError> {
        self.bump_gig_counter(gig_id, GigCounter::Clicks).await
    }

    async fn increment_gig_orders(&self, gig_id: Uuid) -> Result<Option<Gig>, StorageError> {
        self.bump_gig_counter(gig_id, GigCounter::Orders).await
    }

    async fn update_gig_rating(
        &self,
        gig_id: Uuid,
        rating: f64,
        review_count: u32,
    ) -> Result<Gig, StorageError> {
        self.mutate(move |gigs: &mut Collection<Gig>| {
            gigs.update(gig_id, |gig| {
                gig.rating = rating;
                gig.review_count = review_count;
            })
        })
        .await
    }
}
