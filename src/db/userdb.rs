// db/userdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::dtos::userdtos::UpdateProfileDto;
use crate::models::usermodel::{SellerPerformance, User, UserRole};

impl Record for User {
    const COLLECTION: &'static str = keys::USERS;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Outcome of inserting a user whose email must be unique.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(User),
    /// The account already holding the email.
    EmailTaken(User),
}

#[async_trait]
pub trait UserExt {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError>;

    /// `email` must already be normalised.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    async fn get_users(&self) -> Result<Vec<User>, StorageError>;

    async fn get_sellers(&self) -> Result<Vec<User>, StorageError>;

    async fn get_user_count(&self) -> Result<usize, StorageError>;

    async fn save_user(&self, user: User) -> Result<User, StorageError>;

    /// Inserts `user` unless its email is already registered. Lookup and
    /// insert happen under one write.
    async fn register_user(&self, user: User) -> Result<Registration, StorageError>;

    async fn update_user_profile(
        &self,
        user_id: Uuid,
        profile: UpdateProfileDto,
    ) -> Result<User, StorageError>;

    async fn update_seller_performance(
        &self,
        user_id: Uuid,
        performance: SellerPerformance,
    ) -> Result<User, StorageError>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError> {
        let users = self.load::<User>().await?;
        Ok(users.get(&user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let users = self.load::<User>().await?;
        Ok(users.find(|user| user.email == email).cloned())
    }

    async fn get_users(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.load::<User>().await?.into_vec())
    }

    async fn get_sellers(&self) -> Result<Vec<User>, StorageError> {
        let users = self.load::<User>().await?;
        Ok(users.filter(|user| matches!(user.role, UserRole::Seller | UserRole::Admin)))
    }

    async fn get_user_count(&self) -> Result<usize, StorageError> {
        Ok(self.load::<User>().await?.len())
    }

    async fn save_user(&self, user: User) -> Result<User, StorageError> {
        self.mutate(move |users: &mut Collection<User>| {
            users.insert(user.clone());
            Ok::<_, StorageError>(user)
        })
        .await
    }

    async fn register_user(&self, user: User) -> Result<Registration, StorageError> {
        self.mutate(move |users: &mut Collection<User>| {
            if let Some(existing) = users.find(|existing| existing.email == user.email) {
                return Ok::<_, StorageError>(Registration::EmailTaken(existing.clone()));
            }
            users.insert(user.clone());
            Ok(Registration::Created(user))
        })
        .await
    }

    async fn update_user_profile(
        &self,
        user_id: Uuid,
        profile: UpdateProfileDto,
    ) -> Result<User, StorageError> {
        self.mutate(move |users: &mut Collection<User>| {
            users.update(user_id, |user| {
                if let Some(name) = profile.name {
                    user.name = name;
                }
                if let Some(avatar) = profile.avatar {
                    user.avatar = Some(avatar);
                }
                if let Some(bio) = profile.bio {
                    user.bio = Some(bio);
                }
                if let Some(skills) = profile.skills {
                    user.skills = skills;
                }
                if let Some(phone) = profile.phone {
                    user.phone = Some(phone);
                }
                if let Some(is_online) = profile.is_online {
                    user.is_online = is_online;
                }
                if let Some(vacation_mode) = profile.vacation_mode {
                    user.vacation_mode = vacation_mode;
                }
            })
        })
        .await
    }

    async fn update_seller_performance(
        &self,
        user_id: Uuid,
        performance: SellerPerformance,
    ) -> Result<User, StorageError> {
        self.mutate(move |users: &mut Collection<User>| {
            users.update(user_id, |user| {
                user.total_orders = performance.total_orders;
                user.total_earnings = performance.total_earnings;
                user.success_score = performance.success_score;
                user.seller_level = Some(performance.seller_level);
            })
        })
        .await
    }
}
