// service/auth_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{
        db::DBClient,
        sessiondb::SessionExt,
        userdb::{Registration, UserExt},
    },
    dtos::userdtos::{normalize_email, FilterUserDto, LoginUserDto, SignupUserDto, UpdateProfileDto},
    models::{
        sessionmodel::Session,
        usermodel::{SellerLevel, User, UserRole},
    },
    service::error::ServiceError,
    utils::password,
};

#[derive(Debug, Clone)]
pub struct AuthService {
    db_client: Arc<DBClient>,
}

impl AuthService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Registers a buyer or seller and signs them in.
    pub async fn signup(&self, dto: SignupUserDto) -> Result<Session, ServiceError> {
        dto.validate()?;

        let email = normalize_email(&dto.email);
        let registration = self
            .register(dto.name, email.clone(), dto.password, dto.role, dto.bio, dto.skills, dto.phone)
            .await?;
        let user = match registration {
            Registration::Created(user) => user,
            Registration::EmailTaken(_) => {
                tracing::warn!("Signup rejected, {} is already registered", email);
                return Err(ServiceError::UserAlreadyExists(email));
            }
        };

        let session = Session::for_user(&user);
        self.db_client.set_current_session(&session).await?;

        tracing::info!("✅ New {} signed up: {}", user.role.to_str(), user.email);
        Ok(session)
    }

    /// Creates an admin account. Used by bootstrap seeding only.
    pub async fn create_admin(
        &self,
        name: String,
        email: &str,
        password: String,
    ) -> Result<User, ServiceError> {
        let email = normalize_email(email);
        if let Some(existing) = self.db_client.get_user_by_email(&email).await? {
            return Ok(existing);
        }
        if password.len() < password::MIN_PASSWORD_LENGTH {
            return Err(ServiceError::Validation(format!(
                "admin password must be at least {} characters",
                password::MIN_PASSWORD_LENGTH
            )));
        }

        match self
            .register(name, email, password, UserRole::Admin, None, Vec::new(), None)
            .await?
        {
            Registration::Created(admin) => {
                tracing::info!("👑 Bootstrap admin created: {}", admin.email);
                Ok(admin)
            }
            Registration::EmailTaken(existing) => Ok(existing),
        }
    }

    /// Hashes the password, then inserts the user unless the email is taken.
    #[allow(clippy::too_many_arguments)]
    async fn register(
        &self,
        name: String,
        email: String,
        plain_password: String,
        role: UserRole,
        bio: Option<String>,
        skills: Vec<String>,
        phone: Option<String>,
    ) -> Result<Registration, ServiceError> {
        let hashed_password =
            tokio::task::spawn_blocking(move || password::hash(plain_password)).await??;

        let user = User {
            id: Uuid::new_v4(),
            email,
            password: hashed_password,
            role,
            name: name.trim().to_string(),
            avatar: None,
            bio,
            skills,
            phone,
            email_verified: false,
            phone_verified: false,
            two_factor_enabled: false,
            seller_level: (role == UserRole::Seller).then_some(SellerLevel::Beginner),
            success_score: 0.0,
            total_earnings: 0.0,
            total_orders: 0,
            joined_at: Utc::now(),
            is_online: true,
            vacation_mode: false,
        };

        Ok(self.db_client.register_user(user).await?)
    }

    pub async fn login(&self, dto: LoginUserDto) -> Result<Session, ServiceError> {
        dto.validate()?;

        let email = normalize_email(&dto.email);
        let user = self
            .db_client
            .get_user_by_email(&email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        let stored_hash = user.password.clone();
        let plain = dto.password;
        let password_matched =
            tokio::task::spawn_blocking(move || password::compare(&plain, &stored_hash)).await??;

        if !password_matched {
            tracing::warn!("Failed login attempt for {}", email);
            return Err(ServiceError::InvalidCredentials);
        }

        let session = Session::for_user(&user);
        self.db_client.set_current_session(&session).await?;
        tracing::info!("🔑 {} logged in", user.email);
        Ok(session)
    }

    pub async fn logout(&self) -> Result<(), ServiceError> {
        self.db_client.clear_current_session().await?;
        tracing::info!("Session cleared");
        Ok(())
    }

    pub async fn current_session(&self) -> Result<Option<Session>, ServiceError> {
        Ok(self.db_client.get_current_session().await?)
    }

    pub async fn update_profile(
        &self,
        session: &Session,
        dto: UpdateProfileDto,
    ) -> Result<FilterUserDto, ServiceError> {
        dto.validate()?;

        let user = self
            .db_client
            .update_user_profile(session.user_id, dto)
            .await?;

        if let Some(current) = self.db_client.get_current_session().await? {
            if current.user_id == user.id {
                let refreshed = Session {
                    name: user.name.clone(),
                    ..current
                };
                self.db_client.set_current_session(&refreshed).await?;
            }
        }

        tracing::info!("Profile updated for {}", user.id);
        Ok(FilterUserDto::filter_user(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    fn service() -> AuthService {
        AuthService::new(testutil::db())
    }

    #[tokio::test]
    async fn signup_creates_user_and_session() {
        let auth = service();
        let session = auth
            .signup(SignupUserDto::new("Ada", "Ada@Example.com", "secret1", UserRole::Seller))
            .await
            .unwrap();

        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.role, UserRole::Seller);

        let current = auth.current_session().await.unwrap().unwrap();
        assert_eq!(current.user_id, session.user_id);

        let user = auth.db_client.get_user(session.user_id).await.unwrap().unwrap();
        assert_ne!(user.password, "secret1");
        assert_eq!(user.seller_level, Some(SellerLevel::Beginner));
        assert!(!user.email_verified);
    }

    #[tokio::test]
    async fn signup_with_existing_email_fails_without_creating_anything() {
        let auth = service();
        auth.signup(SignupUserDto::new("Ada", "ada@example.com", "secret1", UserRole::Buyer))
            .await
            .unwrap();

        let result = auth
            .signup(SignupUserDto::new("Imposter", " ADA@example.com ", "secret2", UserRole::Seller))
            .await;

        assert!(matches!(result, Err(ServiceError::UserAlreadyExists(_))));
        assert_eq!(auth.db_client.get_user_count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_signups_with_one_email_create_one_user() {
        let auth = Arc::new(service());

        let mut handles = Vec::new();
        for i in 0..4 {
            let auth = auth.clone();
            handles.push(tokio::spawn(async move {
                auth.signup(SignupUserDto::new(
                    format!("Twin {}", i),
                    "twin@example.com",
                    "secret1",
                    UserRole::Buyer,
                ))
                .await
            }));
        }

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(error) => assert!(matches!(error, ServiceError::UserAlreadyExists(_))),
            }
        }

        assert_eq!(created, 1);
        let users = auth.db_client.get_users().await.unwrap();
        assert_eq!(users.iter().filter(|u| u.email == "twin@example.com").count(), 1);
    }

    #[tokio::test]
    async fn create_admin_is_idempotent() {
        let auth = service();
        let first = auth
            .create_admin("Root".to_string(), "root@example.com", "secret1".to_string())
            .await
            .unwrap();
        let again = auth
            .create_admin("Other".to_string(), "ROOT@example.com", "secret2".to_string())
            .await
            .unwrap();

        assert_eq!(first.id, again.id);
        assert!(first.is_admin());
        assert_eq!(auth.db_client.get_user_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn login_checks_the_password() {
        let auth = service();
        auth.signup(SignupUserDto::new("Ada", "ada@example.com", "secret1", UserRole::Buyer))
            .await
            .unwrap();
        auth.logout().await.unwrap();
        assert!(auth.current_session().await.unwrap().is_none());

        let wrong = auth
            .login(LoginUserDto {
                email: "ada@example.com".to_string(),
                password: "secret2".to_string(),
            })
            .await;
        assert!(matches!(wrong, Err(ServiceError::InvalidCredentials)));

        let unknown = auth
            .login(LoginUserDto {
                email: "bob@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert!(matches!(unknown, Err(ServiceError::InvalidCredentials)));

        let session = auth
            .login(LoginUserDto {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(auth.current_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn update_profile_refreshes_the_session_name() {
        let auth = service();
        let session = auth
            .signup(SignupUserDto::new("Ada", "ada@example.com", "secret1", UserRole::Seller))
            .await
            .unwrap();

        let profile = auth
            .update_profile(
                &session,
                UpdateProfileDto {
                    name: Some("Ada L.".to_string()),
                    skills: Some(vec!["rust".to_string()]),
                    vacation_mode: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.name, "Ada L.");
        assert_eq!(profile.skills, vec!["rust".to_string()]);
        assert!(profile.vacation_mode);
        assert_eq!(auth.current_session().await.unwrap().unwrap().name, "Ada L.");
    }

    #[tokio::test]
    async fn update_profile_for_unknown_user_fails() {
        let auth = service();
        let ghost = Session::for_user(&testutil::user(UserRole::Buyer, "Ghost"));

        let result = auth.update_profile(&ghost, UpdateProfileDto::default()).await;
        assert!(matches!(result, Err(ServiceError::UserNotFound(_))));
    }
}
