use thiserror::Error;
use uuid::Uuid;

use crate::db::{keys, storage::StorageError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("A user with email {0} already exists")]
    UserAlreadyExists(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not allowed: {0}")]
    Forbidden(String),

    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Category {0} not found")]
    CategoryNotFound(Uuid),

    #[error("Gig {0} not found")]
    GigNotFound(Uuid),

    #[error("Gig {0} is not accepting orders")]
    GigInactive(Uuid),

    #[error("Order {0} not found")]
    OrderNotFound(Uuid),

    #[error("Order {0} has already been reviewed")]
    ReviewAlreadyExists(Uuid),

    #[error("Dispute {0} not found")]
    DisputeNotFound(Uuid),

    #[error("Withdrawal {0} not found")]
    WithdrawalNotFound(Uuid),

    #[error("Job request {0} not found")]
    JobRequestNotFound(Uuid),

    #[error("Job offer {0} not found")]
    JobOfferNotFound(Uuid),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl ServiceError {
    pub fn forbidden(action: impl Into<String>) -> Self {
        ServiceError::Forbidden(action.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::UserNotFound(_)
                | ServiceError::CategoryNotFound(_)
                | ServiceError::GigNotFound(_)
                | ServiceError::OrderNotFound(_)
                | ServiceError::DisputeNotFound(_)
                | ServiceError::WithdrawalNotFound(_)
                | ServiceError::JobRequestNotFound(_)
                | ServiceError::JobOfferNotFound(_)
        )
    }
}

impl From<StorageError> for ServiceError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::RecordNotFound { collection, id } => match collection {
                keys::USERS => ServiceError::UserNotFound(id),
                keys::CATEGORIES => ServiceError::CategoryNotFound(id),
                keys::GIGS => ServiceError::GigNotFound(id),
                keys::ORDERS => ServiceError::OrderNotFound(id),
                keys::DISPUTES => ServiceError::DisputeNotFound(id),
                keys::WITHDRAWALS => ServiceError::WithdrawalNotFound(id),
                keys::JOB_REQUESTS => ServiceError::JobRequestNotFound(id),
                keys::JOB_OFFERS => ServiceError::JobOfferNotFound(id),
                _ => ServiceError::Storage(StorageError::RecordNotFound { collection, id }),
            },
            other => ServiceError::Storage(other),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl From<argon2::password_hash::Error> for ServiceError {
    fn from(error: argon2::password_hash::Error) -> Self {
        ServiceError::PasswordHash(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(error: tokio::task::JoinError) -> Self {
        ServiceError::PasswordHash(format!("hashing task failed: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_map_to_entity_not_found() {
        let id = Uuid::new_v4();
        let error = ServiceError::from(StorageError::RecordNotFound {
            collection: keys::GIGS,
            id,
        });

        assert!(matches!(error, ServiceError::GigNotFound(found) if found == id));
        assert!(error.is_not_found());
    }

    #[test]
    fn unmapped_collections_stay_storage_errors() {
        let error = ServiceError::from(StorageError::RecordNotFound {
            collection: keys::MESSAGES,
            id: Uuid::new_v4(),
        });

        assert!(matches!(error, ServiceError::Storage(_)));
        assert!(!error.is_not_found());
    }
}
