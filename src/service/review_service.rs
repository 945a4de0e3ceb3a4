// service/review_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{db::DBClient, gigdb::GigExt, orderdb::OrderExt, reviewdb::ReviewExt},
    dtos::reviewdtos::CreateReviewDto,
    models::{
        reviewmodel::{rating_summary, Review},
        sessionmodel::Session,
    },
    service::{error::ServiceError, notification_service::NotificationService},
};

#[derive(Debug, Clone)]
pub struct ReviewService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl ReviewService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    pub async fn get_reviews_by_gig(&self, gig_id: Uuid) -> Result<Vec<Review>, ServiceError> {
        Ok(self.db_client.get_reviews_by_gig(gig_id).await?)
    }

    /// Records the buyer's review of an order and refreshes the gig's rating.
    pub async fn create_review(&self, session: &Session, dto: CreateReviewDto) -> Result<Review, ServiceError> {
        dto.validate()?;

        let order = self
            .db_client
            .get_order(dto.order_id)
            .await?
            .ok_or(ServiceError::OrderNotFound(dto.order_id))?;

        if order.buyer_id != session.user_id {
            tracing::warn!("User {} tried to review order {} they did not buy", session.user_id, order.id);
            return Err(ServiceError::forbidden("only the buyer can review an order"));
        }
        if order.review_id.is_some() {
            return Err(ServiceError::ReviewAlreadyExists(order.id));
        }

        let review = Review {
            id: Uuid::new_v4(),
            order_id: order.id,
            gig_id: order.gig_id,
            buyer_id: order.buyer_id,
            seller_id: order.seller_id,
            rating: dto.rating,
            comment: dto.comment,
            created_at: Utc::now(),
        };

        let review = self
            .db_client
            .save_first_review(review)
            .await?
            .ok_or(ServiceError::ReviewAlreadyExists(order.id))?;
        self.db_client.set_order_review(order.id, review.id).await?;
        self.refresh_gig_rating(review.gig_id).await?;
        self.notification_service.notify_new_review(&review).await?;

        tracing::info!("⭐ {}-star review left on gig {}", review.rating, review.gig_id);
        Ok(review)
    }

    /// Sets the gig's rating and review count from its reviews.
    async fn refresh_gig_rating(&self, gig_id: Uuid) -> Result<(), ServiceError> {
        let reviews = self.db_client.get_reviews_by_gig(gig_id).await?;
        let (rating, review_count) = rating_summary(&reviews);

        match self.db_client.update_gig_rating(gig_id, rating, review_count).await {
            Ok(_) => Ok(()),
            Err(error) => match ServiceError::from(error) {
                // the gig was deleted after the order was placed
                ServiceError::GigNotFound(_) => Ok(()),
                other => Err(other),
            },
        }
    }
}
