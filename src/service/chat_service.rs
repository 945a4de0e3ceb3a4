// service/chat_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{chatdb::ChatExt, db::DBClient, userdb::UserExt},
    dtos::chatdtos::SendMessageDto,
    models::{chatmodels::Message, sessionmodel::Session},
    service::{error::ServiceError, notification_service::NotificationService},
};

#[derive(Debug, Clone)]
pub struct ChatService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl ChatService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    pub async fn get_conversation(&self, user_a: Uuid, user_b: Uuid) -> Result<Vec<Message>, ServiceError> {
        Ok(self.db_client.get_conversation(user_a, user_b).await?)
    }

    pub async fn get_order_messages(&self, order_id: Uuid) -> Result<Vec<Message>, ServiceError> {
        Ok(self.db_client.get_order_messages(order_id).await?)
    }

    pub async fn send_message(&self, session: &Session, dto: SendMessageDto) -> Result<Message, ServiceError> {
        dto.validate()?;

        if self.db_client.get_user(dto.receiver_id).await?.is_none() {
            return Err(ServiceError::UserNotFound(dto.receiver_id));
        }

        let message = Message {
            id: Uuid::new_v4(),
            order_id: dto.order_id,
            sender_id: session.user_id,
            receiver_id: dto.receiver_id,
            content: dto.content,
            files: dto.files,
            is_read: false,
            created_at: Utc::now(),
        };

        let message = self.db_client.save_message(message).await?;
        self.notification_service
            .notify_new_message(message.receiver_id, &session.name)
            .await?;

        tracing::debug!("💬 Message {} sent to {}", message.id, message.receiver_id);
        Ok(message)
    }

    /// Idempotent; an unknown id is ignored.
    pub async fn mark_read(&self, message_id: Uuid) -> Result<(), ServiceError> {
        self.db_client.mark_message_read(message_id).await?;
        Ok(())
    }

    pub async fn unread_count(&self, session: &Session) -> Result<usize, ServiceError> {
        Ok(self.db_client.count_unread_messages(session.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::notificationdb::NotificationExt;
    use crate::models::usermodel::UserRole;
    use crate::service::testutil;

    async fn setup() -> (Arc<DBClient>, ChatService, Session, Session) {
        let db = testutil::db();
        let (_, ann) = testutil::member(&db, UserRole::Buyer, "Ann").await;
        let (_, sam) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let chat = ChatService::new(db.clone(), Arc::new(NotificationService::new(db.clone())));
        (db, chat, ann, sam)
    }

    #[tokio::test]
    async fn conversation_includes_both_directions_oldest_first() {
        let (db, chat, ann, sam) = setup().await;
        let (_, eve) = testutil::member(&db, UserRole::Buyer, "Eve").await;

        chat.send_message(&ann, SendMessageDto::text(sam.user_id, "hi")).await.unwrap();
        chat.send_message(&sam, SendMessageDto::text(ann.user_id, "hello")).await.unwrap();
        chat.send_message(&eve, SendMessageDto::text(sam.user_id, "psst")).await.unwrap();

        let contents: Vec<_> = chat
            .get_conversation(sam.user_id, ann.user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|message| message.content)
            .collect();
        assert_eq!(contents, vec!["hi", "hello"]);
    }

    #[tokio::test]
    async fn unread_messages_are_counted_and_marked() {
        let (db, chat, ann, sam) = setup().await;

        let message = chat
            .send_message(&ann, SendMessageDto::text(sam.user_id, "are you free?"))
            .await
            .unwrap();
        assert!(!message.is_read);
        assert_eq!(chat.unread_count(&sam).await.unwrap(), 1);
        assert_eq!(db.count_unread_notifications(sam.user_id).await.unwrap(), 1);

        chat.mark_read(message.id).await.unwrap();
        chat.mark_read(message.id).await.unwrap();
        chat.mark_read(Uuid::new_v4()).await.unwrap();
        assert_eq!(chat.unread_count(&sam).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn order_threads_and_rejections() {
        let (_, chat, ann, sam) = setup().await;
        let order_id = Uuid::new_v4();

        let mut about_order = SendMessageDto::text(sam.user_id, "about the logo");
        about_order.order_id = Some(order_id);
        chat.send_message(&ann, about_order).await.unwrap();
        chat.send_message(&ann, SendMessageDto::text(sam.user_id, "unrelated")).await.unwrap();
        assert_eq!(chat.get_order_messages(order_id).await.unwrap().len(), 1);

        let blank = chat.send_message(&ann, SendMessageDto::text(sam.user_id, "   ")).await;
        assert!(matches!(blank, Err(ServiceError::Validation(_))));

        let nobody = chat.send_message(&ann, SendMessageDto::text(Uuid::new_v4(), "hello?")).await;
        assert!(matches!(nobody, Err(ServiceError::UserNotFound(_))));
    }
}
