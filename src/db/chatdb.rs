// db/chatdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::chatmodels::Message;

impl Record for Message {
    const COLLECTION: &'static str = keys::MESSAGES;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait ChatExt {
    /// Messages between two users in either direction, oldest first.
    async fn get_conversation(&self, user_a: Uuid, user_b: Uuid) -> Result<Vec<Message>, StorageError>;

    async fn get_order_messages(&self, order_id: Uuid) -> Result<Vec<Message>, StorageError>;

    async fn save_message(&self, message: Message) -> Result<Message, StorageError>;

    /// Returns `None` for an unknown id.
    async fn mark_message_read(&self, message_id: Uuid) -> Result<Option<Message>, StorageError>;

    async fn count_unread_messages(&self, user_id: Uuid) -> Result<usize, StorageError>;
}

#[async_trait]
impl ChatExt for DBClient {
    async fn get_conversation(&self, user_a: Uuid, user_b: Uuid) -> Result<Vec<Message>, StorageError> {
        let messages = self.load::<Message>().await?;
        let mut conversation = messages.filter(|message| message.between(user_a, user_b));
        conversation.sort_by_key(|message| message.created_at);
        Ok(conversation)
    }

    async fn get_order_messages(&self, order_id: Uuid) -> Result<Vec<Message>, StorageError> {
        let messages = self.load::<Message>().await?;
        let mut thread = messages.filter(|message| message.order_id == Some(order_id));
        thread.sort_by_key(|message| message.created_at);
        Ok(thread)
    }

    async fn save_message(&self, message: Message) -> Result<Message, StorageError> {
        self.mutate(move |messages: &mut Collection<Message>| {
            messages.insert(message.clone());
            Ok::<_, StorageError>(message)
        })
        .await
    }

    async fn mark_message_read(&self, message_id: Uuid) -> Result<Option<Message>, StorageError> {
        self.mutate(move |messages: &mut Collection<Message>| {
            let read = messages.get_mut(&message_id).map(|message| {
                message.is_read = true;
                message.clone()
            });
            Ok::<_, StorageError>(read)
        })
        .await
    }

    async fn count_unread_messages(&self, user_id: Uuid) -> Result<usize, StorageError> {
        let messages = self.load::<Message>().await?;
        Ok(messages
            .iter()
            .filter(|message| message.receiver_id == user_id && !message.is_read)
            .count())
    }
}
