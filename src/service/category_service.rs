// service/category_service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{categorydb::CategoryExt, db::DBClient},
    models::categorymodel::Category,
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct CategoryService {
    db_client: Arc<DBClient>,
}

impl CategoryService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.db_client.get_categories().await?)
    }

    pub async fn get_category(&self, category_id: Uuid) -> Result<Category, ServiceError> {
        self.db_client
            .get_category(category_id)
            .await?
            .ok_or(ServiceError::CategoryNotFound(category_id))
    }

    pub async fn get_subcategories(&self, parent_id: Uuid) -> Result<Vec<Category>, ServiceError> {
        Ok(self.db_client.get_subcategories(parent_id).await?)
    }

    pub async fn get_top_level(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.db_client.get_top_level_categories().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{seed, testutil};

    #[tokio::test]
    async fn seeded_tree_has_two_levels() {
        let db = testutil::db();
        seed::seed_categories(&db).await.unwrap();
        let service = CategoryService::new(db);

        let top = service.get_top_level().await.unwrap();
        assert!(!top.is_empty());
        assert!(top.iter().all(Category::is_top_level));

        let design = top.iter().find(|c| c.slug == "graphics-design").unwrap();
        let children = service.get_subcategories(design.id).await.unwrap();
        assert!(!children.is_empty());
        assert!(children.iter().all(|c| c.parent_id == Some(design.id)));

        let all = service.get_categories().await.unwrap();
        assert!(all.len() > top.len());
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let service = CategoryService::new(testutil::db());
        let missing = Uuid::new_v4();
        assert!(matches!(
            service.get_category(missing).await,
            Err(ServiceError::CategoryNotFound(id)) if id == missing
        ));
    }
}
