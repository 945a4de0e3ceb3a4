// db/reviewdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::reviewmodel::Review;

impl Record for Review {
    const COLLECTION: &'static str = keys::REVIEWS;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait ReviewExt {
    async fn get_reviews(&self) -> Result<Vec<Review>, StorageError>;

    async fn get_reviews_by_gig(&self, gig_id: Uuid) -> Result<Vec<Review>, StorageError>;

    async fn get_review_for_order(&self, order_id: Uuid) -> Result<Option<Review>, StorageError>;

    /// Stores `review` unless its order already has one, in which case
    /// nothing is written and `None` comes back.
    async fn save_first_review(&self, review: Review) -> Result<Option<Review>, StorageError>;
}

#[async_trait]
impl ReviewExt for DBClient {
    async fn get_reviews(&self) -> Result<Vec<Review>, StorageError> {
        Ok(self.load::<Review>().await?.into_vec())
    }

    async fn get_reviews_by_gig(&self, gig_id: Uuid) -> Result<Vec<Review>, StorageError> {
        let reviews = self.load::<Review>().await?;
        Ok(reviews.filter(|review| review.gig_id == gig_id))
    }

    async fn get_review_for_order(&self, order_id: Uuid) -> Result<Option<Review>, StorageError> {
        let reviews = self.load::<Review>().await?;
        Ok(reviews.find(|review| review.order_id == order_id).cloned())
    }

    async fn save_first_review(&self, review: Review) -> Result<Option<Review>, StorageError> {
        self.mutate(move |reviews: &mut Collection<Review>| {
            if reviews.find(|existing| existing.order_id == review.order_id).is_some() {
                return Ok::<_, StorageError>(None);
            }
            reviews.insert(review.clone());
            Ok(Some(review))
        })
        .await
    }
}
