// service/dashboard_service.rs
use std::sync::Arc;

use crate::{
    db::{db::DBClient, disputedb::DisputeExt, gigdb::GigExt, orderdb::OrderExt, userdb::UserExt},
    dtos::dashboarddtos::{AdminStatsDto, BuyerStatsDto, SellerStatsDto},
    models::{
        disputemodel::Dispute,
        gigmodel::Gig,
        ordermodel::{Order, OrderStatus},
        sessionmodel::Session,
    },
    service::error::ServiceError,
    utils::currency,
};

fn completed_revenue(orders: &[Order]) -> f64 {
    currency::sum(
        orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .map(|order| order.amount),
    )
}

pub fn seller_stats(orders: &[Order], gigs: &[Gig]) -> SellerStatsDto {
    let average_rating = if gigs.is_empty() {
        0.0
    } else {
        gigs.iter().map(|gig| gig.rating).sum::<f64>() / gigs.len() as f64
    };

    SellerStatsDto {
        total_earnings: completed_revenue(orders),
        completed_orders: orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .count(),
        active_orders: orders.iter().filter(|order| order.status.is_active()).count(),
        average_rating,
        active_gigs: gigs.iter().filter(|gig| gig.is_active).count(),
        total_gigs: gigs.len(),
    }
}

pub fn buyer_stats(orders: &[Order]) -> BuyerStatsDto {
    BuyerStatsDto {
        total_orders: orders.len(),
        active_orders: orders.iter().filter(|order| order.status.is_active()).count(),
        completed_orders: orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .count(),
        total_spent: currency::sum(orders.iter().map(|order| order.amount)),
    }
}

pub fn admin_stats(user_count: usize, gigs: &[Gig], orders: &[Order], disputes: &[Dispute]) -> AdminStatsDto {
    AdminStatsDto {
        total_users: user_count,
        total_gigs: gigs.len(),
        active_gigs: gigs.iter().filter(|gig| gig.is_active).count(),
        total_orders: orders.len(),
        total_revenue: completed_revenue(orders),
        active_disputes: disputes.iter().filter(|dispute| dispute.is_unresolved()).count(),
    }
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    db_client: Arc<DBClient>,
}

impl DashboardService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn seller_stats(&self, session: &Session) -> Result<SellerStatsDto, ServiceError> {
        let orders = self.db_client.get_seller_orders(session.user_id).await?;
        let gigs = self.db_client.get_gigs_by_seller(session.user_id).await?;
        Ok(seller_stats(&orders, &gigs))
    }

    pub async fn buyer_stats(&self, session: &Session) -> Result<BuyerStatsDto, ServiceError> {
        let orders = self.db_client.get_buyer_orders(session.user_id).await?;
        Ok(buyer_stats(&orders))
    }

    pub async fn admin_stats(&self, session: &Session) -> Result<AdminStatsDto, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can see platform totals"));
        }
        self.platform_stats().await
    }

    /// Platform totals without an identity check, for startup logging.
    pub async fn platform_stats(&self) -> Result<AdminStatsDto, ServiceError> {
        let user_count = self.db_client.get_user_count().await?;
        let gigs = self.db_client.get_gigs().await?;
        let orders = self.db_client.get_orders().await?;
        let disputes = self.db_client.get_disputes().await?;
        Ok(admin_stats(user_count, &gigs, &orders, &disputes))
    }
}
