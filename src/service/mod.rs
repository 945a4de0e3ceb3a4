pub mod auth_service;
pub mod category_service;
pub mod chat_service;
pub mod dashboard_service;
pub mod dispute_service;
pub mod error;
pub mod gig_service;
pub mod job_service;
pub mod notification_service;
pub mod order_service;
pub mod review_service;
pub mod seed;
pub mod settings_service;
pub mod user_service;
pub mod wallet_service;

#[cfg(test)]
pub(crate) mod testutil;
