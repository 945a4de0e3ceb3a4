// service/user_service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, userdb::UserExt},
    dtos::userdtos::FilterUserDto,
    models::sessionmodel::Session,
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct UserService {
    db_client: Arc<DBClient>,
}

impl UserService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Every account on the platform. Admins only.
    pub async fn get_users(&self, session: &Session) -> Result<Vec<FilterUserDto>, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can list users"));
        }
        let users = self.db_client.get_users().await?;
        Ok(FilterUserDto::filter_users(&users))
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<FilterUserDto, ServiceError> {
        let user = self
            .db_client
            .get_user(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;
        Ok(FilterUserDto::filter_user(&user))
    }

    pub async fn get_sellers(&self) -> Result<Vec<FilterUserDto>, ServiceError> {
        let sellers = self.db_client.get_sellers().await?;
        Ok(FilterUserDto::filter_users(&sellers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::usermodel::UserRole;
    use crate::service::testutil;

    #[tokio::test]
    async fn listing_users_requires_admin() {
        let db = testutil::db();
        let (_, buyer) = testutil::member(&db, UserRole::Buyer, "Bea").await;
        let (_, admin) = testutil::member(&db, UserRole::Admin, "Root").await;
        let service = UserService::new(db);

        assert!(matches!(
            service.get_users(&buyer).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert_eq!(service.get_users(&admin).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn sellers_include_admins_but_not_buyers() {
        let db = testutil::db();
        testutil::member(&db, UserRole::Buyer, "Bea").await;
        testutil::member(&db, UserRole::Seller, "Sam").await;
        testutil::member(&db, UserRole::Admin, "Root").await;
        let service = UserService::new(db);

        let names: Vec<_> = service
            .get_sellers()
            .await
            .unwrap()
            .into_iter()
            .map(|seller| seller.name)
            .collect();
        assert_eq!(names, vec!["Sam", "Root"]);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let service = UserService::new(testutil::db());
        let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
