use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::usermodel::{SellerLevel, User, UserRole};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUserDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,

    #[validate(custom = "validate_signup_role")]
    pub role: UserRole,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

fn validate_signup_role(role: &UserRole) -> Result<(), validator::ValidationError> {
    match role {
        UserRole::Buyer | UserRole::Seller => Ok(()),
        UserRole::Admin => Err(validator::ValidationError::new("admin_self_signup")),
    }
}

impl SignupUserDto {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> Self {
        let password = password.into();
        SignupUserDto {
            name: name.into(),
            email: email.into(),
            password_confirm: password.clone(),
            password,
            role,
            bio: None,
            skills: Vec::new(),
            phone: None,
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginUserDto {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub phone: Option<String>,
    pub is_online: Option<bool>,
    pub vacation_mode: Option<bool>,
}

/// A user as shown to other users: everything except the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub phone: Option<String>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub seller_level: Option<SellerLevel>,
    pub success_score: f64,
    pub total_earnings: f64,
    pub total_orders: u32,
    pub is_online: bool,
    pub vacation_mode: bool,
    pub joined_at: DateTime<Utc>,
}

impl FilterUserDto {
    pub fn filter_user(user: &User) -> Self {
        FilterUserDto {
            id: user.id,
            email: user.email.to_owned(),
            name: user.name.to_owned(),
            role: user.role.to_str().to_string(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            skills: user.skills.clone(),
            phone: user.phone.clone(),
            email_verified: user.email_verified,
            phone_verified: user.phone_verified,
            seller_level: user.seller_level,
            success_score: user.success_score,
            total_earnings: user.total_earnings,
            total_orders: user.total_orders,
            is_online: user.is_online,
            vacation_mode: user.vacation_mode,
            joined_at: user.joined_at,
        }
    }

    pub fn filter_users(users: &[User]) -> Vec<FilterUserDto> {
        users.iter().map(FilterUserDto::filter_user).collect()
    }
}

/// Lowercased, trimmed form used for storing and matching emails.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_short_and_mismatched_passwords() {
        let mut dto = SignupUserDto::new("Ada", "ada@example.com", "12345", UserRole::Buyer);
        assert!(dto.validate().is_err());

        dto.password = "123456".to_string();
        dto.password_confirm = "654321".to_string();
        assert!(dto.validate().is_err());

        dto.password_confirm = "123456".to_string();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn signup_refuses_admin_role() {
        let dto = SignupUserDto::new("Root", "root@example.com", "secret1", UserRole::Admin);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }
}
