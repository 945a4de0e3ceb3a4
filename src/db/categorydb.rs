// db/categorydb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::categorymodel::Category;

impl Record for Category {
    const COLLECTION: &'static str = keys::CATEGORIES;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait CategoryExt {
    async fn get_categories(&self) -> Result<Vec<Category>, StorageError>;

    async fn get_category(&self, category_id: Uuid) -> Result<Option<Category>, StorageError>;

    async fn get_subcategories(&self, parent_id: Uuid) -> Result<Vec<Category>, StorageError>;

    async fn get_top_level_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Stores `categories` only while the collection is empty. Returns how
    /// many were written.
    async fn seed_categories_if_empty(&self, categories: Vec<Category>) -> Result<usize, StorageError>;
}

#[async_trait]
impl CategoryExt for DBClient {
    async fn get_categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.load::<Category>().await?.into_vec())
    }

    async fn get_category(&self, category_id: Uuid) -> Result<Option<Category>, StorageError> {
        Ok(self.load::<Category>().await?.get(&category_id).cloned())
    }

    async fn get_subcategories(&self, parent_id: Uuid) -> Result<Vec<Category>, StorageError> {
        let categories = self.load::<Category>().await?;
        Ok(categories.filter(|category| category.parent_id == Some(parent_id)))
    }

    async fn get_top_level_categories(&self) -> Result<Vec<Category>, StorageError> {
        let categories = self.load::<Category>().await?;
        Ok(categories.filter(Category::is_top_level))
    }

    async fn seed_categories_if_empty(&self, categories: Vec<Category>) -> Result<usize, StorageError> {
        self.mutate(move |stored: &mut Collection<Category>| {
            if !stored.is_empty() {
                return Ok::<_, StorageError>(0);
            }
            let count = categories.len();
            for category in categories {
                stored.insert(category);
            }
            Ok(count)
        })
        .await
    }
}
