// service/notification_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{db::DBClient, notificationdb::NotificationExt},
    dtos::notificationdtos::CreateNotificationDto,
    models::{
        disputemodel::Dispute,
        notificationmodel::{Notification, NotificationType},
        ordermodel::{Order, OrderStatus},
        reviewmodel::Review,
        walletmodels::Withdrawal,
    },
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct NotificationService {
    db_client: Arc<DBClient>,
}

impl NotificationService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn get_user_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>, ServiceError> {
        Ok(self.db_client.get_user_notifications(user_id).await?)
    }

    pub async fn create_notification(
        &self,
        dto: CreateNotificationDto,
    ) -> Result<Notification, ServiceError> {
        dto.validate()?;

        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: dto.user_id,
            kind: dto.kind,
            title: dto.title,
            message: dto.message,
            link: dto.link,
            is_read: false,
            created_at: Utc::now(),
        };

        tracing::debug!(
            "🔔 {} notification for user {}: {}",
            notification.kind.to_str(),
            notification.user_id,
            notification.title
        );

        Ok(self.db_client.save_notification(notification).await?)
    }

    /// Marking an unknown or already-read notification is not an error.
    pub async fn mark_read(&self, notification_id: Uuid) -> Result<(), ServiceError> {
        if self
            .db_client
            .mark_notification_read(notification_id)
            .await?
            .is_none()
        {
            tracing::debug!("Notification {} not found, nothing to mark", notification_id);
        }
        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<usize, ServiceError> {
        Ok(self.db_client.mark_all_notifications_read(user_id).await?)
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<usize, ServiceError> {
        Ok(self.db_client.count_unread_notifications(user_id).await?)
    }

    async fn store_notification(
        &self,
        user_id: Uuid,
        kind: NotificationType,
        title: impl Into<String>,
        message: String,
        link: Option<String>,
    ) -> Result<(), ServiceError> {
        self.create_notification(CreateNotificationDto {
            user_id,
            kind,
            title: title.into(),
            message,
            link,
        })
        .await?;
        Ok(())
    }

    pub async fn notify_new_order(&self, order: &Order, gig_title: &str) -> Result<(), ServiceError> {
        tracing::info!("New order notification: order {} for seller {}", order.id, order.seller_id);

        self.store_notification(
            order.seller_id,
            NotificationType::Order,
            "New order received",
            format!("You have a new {} order for \"{}\"", order.pricing_tier.to_str(), gig_title),
            Some(format!("/orders/{}", order.id)),
        )
        .await
    }

    pub async fn notify_order_status(
        &self,
        recipient: Uuid,
        order: &Order,
        previous: OrderStatus,
    ) -> Result<(), ServiceError> {
        tracing::info!(
            "Order status notification: order {} moved {} -> {}",
            order.id,
            previous.to_str(),
            order.status.to_str()
        );

        self.store_notification(
            recipient,
            NotificationType::Order,
            "Order updated",
            format!("Order status changed to {}", order.status.to_str()),
            Some(format!("/orders/{}", order.id)),
        )
        .await
    }

    pub async fn notify_new_message(
        &self,
        receiver_id: Uuid,
        sender_name: &str,
    ) -> Result<(), ServiceError> {
        self.store_notification(
            receiver_id,
            NotificationType::Message,
            "New message",
            format!("{} sent you a message", sender_name),
            Some("/messages".to_string()),
        )
        .await
    }

    pub async fn notify_new_review(&self, review: &Review) -> Result<(), ServiceError> {
        self.store_notification(
            review.seller_id,
            NotificationType::Review,
            "New review",
            format!("You received a {}-star review", review.rating),
            Some(format!("/gigs/{}", review.gig_id)),
        )
        .await
    }

    pub async fn notify_dispute_raised(&self, against: Uuid, dispute: &Dispute) -> Result<(), ServiceError> {
        tracing::info!("Dispute notification: dispute {} raised on order {}", dispute.id, dispute.order_id);

        self.store_notification(
            against,
            NotificationType::Dispute,
            "Dispute opened",
            format!("A dispute was opened on your order: {}", dispute.reason),
            Some(format!("/disputes/{}", dispute.id)),
        )
        .await
    }

    pub async fn notify_dispute_resolved(&self, order: &Order, dispute: &Dispute) -> Result<(), ServiceError> {
        let message = match dispute.refund_amount {
            Some(refund) if refund > 0.0 => format!("Dispute resolved with a refund of {:.2}", refund),
            _ => "Dispute resolved".to_string(),
        };

        for party in [order.buyer_id, order.seller_id] {
            self.store_notification(
                party,
                NotificationType::Dispute,
                "Dispute resolved",
                message.clone(),
                Some(format!("/disputes/{}", dispute.id)),
            )
            .await?;
        }
        Ok(())
    }

    pub async fn notify_withdrawal_processed(&self, withdrawal: &Withdrawal) -> Result<(), ServiceError> {
        self.store_notification(
            withdrawal.user_id,
            NotificationType::System,
            "Withdrawal update",
            format!(
                "Your withdrawal of {:.2} is now {}",
                withdrawal.amount,
                withdrawal.status.to_str()
            ),
            Some("/wallet".to_string()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    fn system_notice(user_id: Uuid, title: &str) -> CreateNotificationDto {
        CreateNotificationDto {
            user_id,
            kind: NotificationType::System,
            title: title.to_string(),
            message: "Welcome aboard".to_string(),
            link: None,
        }
    }

    #[tokio::test]
    async fn mark_read_twice_is_idempotent() {
        let service = NotificationService::new(testutil::db());
        let user_id = Uuid::new_v4();
        let notification = service
            .create_notification(system_notice(user_id, "Hello"))
            .await
            .unwrap();

        service.mark_read(notification.id).await.unwrap();
        service.mark_read(notification.id).await.unwrap();

        let inbox = service.get_user_notifications(user_id).await.unwrap();
        assert!(inbox[0].is_read);
        assert_eq!(service.unread_count(user_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mark_read_ignores_unknown_ids() {
        let service = NotificationService::new(testutil::db());
        assert!(service.mark_read(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn inbox_is_newest_first_and_mark_all_read_clears_it() {
        let service = NotificationService::new(testutil::db());
        let user_id = Uuid::new_v4();
        for title in ["first", "second", "third"] {
            service.create_notification(system_notice(user_id, title)).await.unwrap();
        }
        service
            .create_notification(system_notice(Uuid::new_v4(), "someone else"))
            .await
            .unwrap();

        let inbox = service.get_user_notifications(user_id).await.unwrap();
        let titles: Vec<_> = inbox.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);

        assert_eq!(service.mark_all_read(user_id).await.unwrap(), 3);
        assert_eq!(service.unread_count(user_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let service = NotificationService::new(testutil::db());
        let result = service
            .create_notification(system_notice(Uuid::new_v4(), ""))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
