// db/db.rs
use std::path::Path;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use super::collection::{Collection, Record};
use super::keys;
use super::storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};

#[derive(Clone)]
pub struct DBClient {
    storage: Arc<dyn StorageBackend>,
    // serialises read-modify-write cycles across tasks
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("storage", &self.storage)
            .finish()
    }
}

impl DBClient {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        DBClient {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Volatile store, used by tests and when no storage directory is configured.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store backed by a directory of JSON files.
    pub async fn open_dir(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let storage = FileStorage::open(path).await?;
        Ok(Self::new(Arc::new(storage)))
    }

    /// Reads a whole collection. A key that was never written is an empty collection.
    pub async fn load<T: Record>(&self) -> Result<Collection<T>, StorageError> {
        match self.storage.get_item(T::COLLECTION).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                key: T::COLLECTION.to_string(),
                source,
            }),
            None => Ok(Collection::new()),
        }
    }

    async fn store<T: Record>(&self, collection: &Collection<T>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(collection).map_err(|source| StorageError::Encode {
            key: T::COLLECTION.to_string(),
            source,
        })?;
        self.storage.set_item(T::COLLECTION, raw).await
    }

    /// Loads a collection, runs `operation` on it and writes it back.
    ///
    /// Nothing is written when `operation` fails. Calls must not nest: the
    /// write lock is not re-entrant.
    pub async fn mutate<T, R, E, F>(&self, operation: F) -> Result<R, E>
    where
        T: Record,
        R: Send,
        E: From<StorageError> + Send,
        F: FnOnce(&mut Collection<T>) -> Result<R, E> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.load::<T>().await?;
        let result = operation(&mut collection)?;
        self.store(&collection).await?;
        Ok(result)
    }

    pub async fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.storage.get_item(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub async fn set_object<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set_item(key, raw).await
    }

    /// Read-modify-write of a single-object key under the write lock. A
    /// missing object starts from `T::default()`.
    pub async fn update_object<T, F>(&self, key: &str, change: F) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned + Default + Send + Sync,
        F: FnOnce(&mut T) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut value = self.get_object::<T>(key).await?.unwrap_or_default();
        change(&mut value);
        self.set_object(key, &value).await?;
        Ok(value)
    }

    pub async fn remove_object(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).await
    }

    /// Drops every collection, the settings and the session pointer.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        for key in keys::ALL {
            self.storage.remove_item(key).await?;
        }
        tracing::info!("Cleared all marketplace storage");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{gigdb::GigExt, sessiondb::SessionExt, settingsdb::SettingsExt};
    use crate::models::{gigmodel::Gig, sessionmodel::Session, usermodel::UserRole};
    use crate::service::testutil;

    #[tokio::test]
    async fn missing_collections_load_empty() {
        let db = DBClient::in_memory();
        assert!(db.load::<Gig>().await.unwrap().is_empty());
        assert!(db.get_current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_mutation_writes_nothing() {
        let db = DBClient::in_memory();
        let gig = testutil::gig(uuid::Uuid::new_v4(), "Logo design", [10.0, 20.0, 30.0]);

        let result: Result<(), StorageError> = db
            .mutate(|gigs: &mut Collection<Gig>| {
                gigs.insert(gig.clone());
                Err(StorageError::RecordNotFound {
                    collection: keys::GIGS,
                    id: gig.id,
                })
            })
            .await;

        assert!(result.is_err());
        assert!(db.get_gig(gig.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_counter_bumps_are_not_lost() {
        let db = Arc::new(DBClient::in_memory());
        let gig = db
            .save_gig(testutil::gig(uuid::Uuid::new_v4(), "Logo design", [10.0, 20.0, 30.0]))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                db.increment_gig_views(gig.id).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(db.get_gig(gig.id).await.unwrap().unwrap().views, 20);
    }

    #[tokio::test]
    async fn clear_all_drops_every_key() {
        let db = DBClient::in_memory();
        let user = testutil::user(UserRole::Buyer, "Bea");
        db.save_gig(testutil::gig(user.id, "Logo design", [10.0, 20.0, 30.0]))
            .await
            .unwrap();
        db.set_current_session(&Session::for_user(&user)).await.unwrap();

        db.clear_all().await.unwrap();

        assert!(db.get_gigs().await.unwrap().is_empty());
        assert!(db.get_current_session().await.unwrap().is_none());
        assert_eq!(db.get_settings().await.unwrap().withdrawal_fee, 2.5);
    }

    #[tokio::test]
    async fn file_store_keeps_the_array_layout() {
        let dir = tempfile::tempdir().unwrap();
        let gig = testutil::gig(uuid::Uuid::new_v4(), "Logo design", [10.0, 20.0, 30.0]);

        let db = DBClient::open_dir(dir.path()).await.unwrap();
        db.save_gig(gig.clone()).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("freelancer_gigs.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["sellerId"], serde_json::json!(gig.seller_id));
        assert_eq!(value[0]["pricing"][0]["name"], "basic");

        let reopened = DBClient::open_dir(dir.path()).await.unwrap();
        assert_eq!(reopened.get_gig(gig.id).await.unwrap(), Some(gig));
    }
}
