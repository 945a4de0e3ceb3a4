// db/sessiondb.rs
use async_trait::async_trait;

use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::sessionmodel::Session;

#[async_trait]
pub trait SessionExt {
    async fn get_current_session(&self) -> Result<Option<Session>, StorageError>;

    async fn set_current_session(&self, session: &Session) -> Result<(), StorageError>;

    async fn clear_current_session(&self) -> Result<(), StorageError>;
}

#[async_trait]
impl SessionExt for DBClient {
    async fn get_current_session(&self) -> Result<Option<Session>, StorageError> {
        self.get_object(keys::CURRENT_USER).await
    }

    async fn set_current_session(&self, session: &Session) -> Result<(), StorageError> {
        self.set_object(keys::CURRENT_USER, session).await
    }

    async fn clear_current_session(&self) -> Result<(), StorageError> {
        self.remove_object(keys::CURRENT_USER).await
    }
}
