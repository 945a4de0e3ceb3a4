// service/dispute_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{db::DBClient, disputedb::DisputeExt, orderdb::OrderExt},
    dtos::disputedtos::{RaiseDisputeDto, ResolveDisputeDto},
    models::{
        disputemodel::{Dispute, DisputeStatus},
        ordermodel::OrderStatus,
        sessionmodel::Session,
    },
    service::{
        error::ServiceError, notification_service::NotificationService,
        order_service::OrderService,
    },
};

#[derive(Debug, Clone)]
pub struct DisputeService {
    db_client: Arc<DBClient>,
    order_service: Arc<OrderService>,
    notification_service: Arc<NotificationService>,
}

impl DisputeService {
    pub fn new(
        db_client: Arc<DBClient>,
        order_service: Arc<OrderService>,
        notification_service: Arc<NotificationService>,
    ) -> Self {
        Self {
            db_client,
            order_service,
            notification_service,
        }
    }

    pub async fn get_disputes(&self, session: &Session) -> Result<Vec<Dispute>, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can list disputes"));
        }
        Ok(self.db_client.get_disputes().await?)
    }

    pub async fn get_dispute(&self, dispute_id: Uuid) -> Result<Dispute, ServiceError> {
        self.db_client
            .get_dispute(dispute_id)
            .await?
            .ok_or(ServiceError::DisputeNotFound(dispute_id))
    }

    /// Opens a dispute on an order and flags the order as disputed.
    pub async fn raise_dispute(&self, session: &Session, dto: RaiseDisputeDto) -> Result<Dispute, ServiceError> {
        dto.validate()?;

        let order = self.order_service.get_order(dto.order_id).await?;
        if !order.involves(session.user_id) {
            tracing::warn!("User {} tried to dispute order {}", session.user_id, order.id);
            return Err(ServiceError::forbidden("only the order's buyer or seller can raise a dispute"));
        }

        let dispute = Dispute {
            id: Uuid::new_v4(),
            order_id: order.id,
            raised_by: session.user_id,
            reason: dto.reason,
            description: dto.description,
            evidence: dto.evidence,
            status: DisputeStatus::Open,
            resolution: None,
            refund_amount: None,
            created_at: Utc::now(),
            resolved_at: None,
        };

        let dispute = self.db_client.save_dispute(dispute).await?;
        self.db_client
            .update_order_status(order.id, OrderStatus::Disputed)
            .await?;
        self.order_service
            .refresh_seller_performance(order.seller_id)
            .await?;
        self.notification_service
            .notify_dispute_raised(order.counterparty(session.user_id), &dispute)
            .await?;

        tracing::info!("⚠️ Dispute {} raised on order {} by {}", dispute.id, order.id, session.user_id);
        Ok(dispute)
    }

    pub async fn start_review(&self, session: &Session, dispute_id: Uuid) -> Result<Dispute, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can review disputes"));
        }

        let dispute = self
            .db_client
            .update_dispute_status(dispute_id, DisputeStatus::InReview)
            .await?;
        tracing::info!("Dispute {} is in review", dispute.id);
        Ok(dispute)
    }

    pub async fn resolve_dispute(
        &self,
        session: &Session,
        dispute_id: Uuid,
        dto: ResolveDisputeDto,
    ) -> Result<Dispute, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can resolve disputes"));
        }
        dto.validate()?;

        let dispute = self.get_dispute(dispute_id).await?;
        let order = self.order_service.get_order(dispute.order_id).await?;

        if let Some(refund) = dto.refund_amount {
            if !(0.0..=order.amount).contains(&refund) {
                return Err(ServiceError::Validation(format!(
                    "refund must be between 0 and the order amount {:.2}",
                    order.amount
                )));
            }
        }

        let resolved = self
            .db_client
            .resolve_dispute(dispute.id, dto.resolution, dto.refund_amount)
            .await?;
        self.notification_service
            .notify_dispute_resolved(&order, &resolved)
            .await?;

        tracing::info!("✅ Dispute {} resolved by {}", resolved.id, session.user_id);
        Ok(resolved)
    }
}
