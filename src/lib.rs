pub mod config;
pub mod db;
pub mod dtos;
pub mod models;
pub mod service;
pub mod utils;

use std::sync::Arc;

use config::Config;
use db::db::DBClient;

use service::{
    auth_service::AuthService,
    category_service::CategoryService,
    chat_service::ChatService,
    dashboard_service::DashboardService,
    dispute_service::DisputeService,
    gig_service::GigService,
    job_service::JobService,
    notification_service::NotificationService,
    order_service::OrderService,
    review_service::ReviewService,
    settings_service::SettingsService,
    user_service::UserService,
    wallet_service::WalletService,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    // Services
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub category_service: Arc<CategoryService>,
    pub gig_service: Arc<GigService>,
    pub order_service: Arc<OrderService>,
    pub review_service: Arc<ReviewService>,
    pub chat_service: Arc<ChatService>,
    pub dispute_service: Arc<DisputeService>,
    pub notification_service: Arc<NotificationService>,
    pub wallet_service: Arc<WalletService>,
    pub job_service: Arc<JobService>,
    pub dashboard_service: Arc<DashboardService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    pub fn new(db_client: DBClient, config: Config) -> Self {
        let db_client_arc = Arc::new(db_client);

        let notification_service = Arc::new(NotificationService::new(db_client_arc.clone()));
        let order_service = Arc::new(OrderService::new(
            db_client_arc.clone(),
            notification_service.clone(),
        ));
        let dispute_service = Arc::new(DisputeService::new(
            db_client_arc.clone(),
            order_service.clone(),
            notification_service.clone(),
        ));

        AppState {
            env: config,
            auth_service: Arc::new(AuthService::new(db_client_arc.clone())),
            user_service: Arc::new(UserService::new(db_client_arc.clone())),
            category_service: Arc::new(CategoryService::new(db_client_arc.clone())),
            gig_service: Arc::new(GigService::new(db_client_arc.clone())),
            review_service: Arc::new(ReviewService::new(
                db_client_arc.clone(),
                notification_service.clone(),
            )),
            chat_service: Arc::new(ChatService::new(
                db_client_arc.clone(),
                notification_service.clone(),
            )),
            wallet_service: Arc::new(WalletService::new(
                db_client_arc.clone(),
                notification_service.clone(),
            )),
            job_service: Arc::new(JobService::new(db_client_arc.clone())),
            dashboard_service: Arc::new(DashboardService::new(db_client_arc.clone())),
            settings_service: Arc::new(SettingsService::new(db_client_arc.clone())),
            order_service,
            dispute_service,
            notification_service,
            db_client: db_client_arc,
        }
    }
}
