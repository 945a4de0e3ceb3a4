// db/notificationdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::notificationmodel::Notification;

impl Record for Notification {
    const COLLECTION: &'static str = keys::NOTIFICATIONS;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait NotificationExt {
    /// Newest first.
    async fn get_user_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>, StorageError>;

    async fn save_notification(&self, notification: Notification) -> Result<Notification, StorageError>;

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
    ) -> Result<Option<Notification>, StorageError>;

    /// Returns how many notifications changed.
    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<usize, StorageError>;

    async fn count_unread_notifications(&self, user_id: Uuid) -> Result<usize, StorageError>;
}

#[async_trait]
impl NotificationExt for DBClient {
    async fn get_user_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>, StorageError> {
        let notifications = self.load::<Notification>().await?;
        let mut inbox = notifications.filter(|notification| notification.user_id == user_id);
        // stable sort, so same-instant notifications stay newest-inserted first
        inbox.reverse();
        inbox.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(inbox)
    }

    async fn save_notification(&self, notification: Notification) -> Result<Notification, StorageError> {
        self.mutate(move |notifications: &mut Collection<Notification>| {
            notifications.insert(notification.clone());
            Ok::<_, StorageError>(notification)
        })
        .await
    }

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
    ) -> Result<Option<Notification>, StorageError> {
        self.mutate(move |notifications: &mut Collection<Notification>| {
            let read = notifications.get_mut(&notification_id).map(|notification| {
                notification.is_read = true;
                notification.clone()
            });
            Ok::<_, StorageError>(read)
        })
        .await
    }

    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<usize, StorageError> {
        self.mutate(move |notifications: &mut Collection<Notification>| {
            let mut changed = 0;
            for notification in notifications.iter_mut() {
                if notification.user_id == user_id && !notification.is_read {
                    notification.is_read = true;
                    changed += 1;
                }
            }
            Ok::<_, StorageError>(changed)
        })
        .await
    }

    async fn count_unread_notifications(&self, user_id: Uuid) -> Result<usize, StorageError> {
        let notifications = self.load::<Notification>().await?;
        Ok(notifications
            .iter()
            .filter(|notification| notification.user_id == user_id && !notification.is_read)
            .count())
    }
}
