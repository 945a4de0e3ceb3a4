// service/order_service.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{db::DBClient, gigdb::GigExt, orderdb::OrderExt, userdb::UserExt},
    dtos::orderdtos::{PlaceOrderDto, UpdateOrderDto},
    models::{
        gigmodel::GigAddOn,
        ordermodel::{Order, OrderStatus},
        sessionmodel::Session,
        usermodel::{SellerLevel, SellerPerformance},
    },
    service::{error::ServiceError, notification_service::NotificationService},
    utils::currency,
};

/// Seller performance derived from every order the seller has received.
///
/// The success score is the share of closed orders that completed, as a
/// percentage; 0 while nothing has closed.
pub fn seller_performance(orders: &[Order]) -> SellerPerformance {
    let completed: Vec<&Order> = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .collect();
    let closed = orders.iter().filter(|order| order.status.is_closed()).count();

    let completed_count = completed.len() as u32;
    let success_score = if closed == 0 {
        0.0
    } else {
        completed.len() as f64 / closed as f64 * 100.0
    };

    SellerPerformance {
        total_orders: completed_count,
        total_earnings: currency::sum(completed.iter().map(|order| order.amount)),
        success_score,
        seller_level: SellerLevel::for_completed_orders(completed_count),
    }
}

#[derive(Debug, Clone)]
pub struct OrderService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl OrderService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    /// Every order on the platform. Admins only.
    pub async fn get_orders(&self, session: &Session) -> Result<Vec<Order>, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can list all orders"));
        }
        Ok(self.db_client.get_orders().await?)
    }

    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, ServiceError> {
        self.db_client
            .get_order(order_id)
            .await?
            .ok_or(ServiceError::OrderNotFound(order_id))
    }

    pub async fn get_buyer_orders(&self, buyer_id: Uuid) -> Result<Vec<Order>, ServiceError> {
        Ok(self.db_client.get_buyer_orders(buyer_id).await?)
    }

    pub async fn get_seller_orders(&self, seller_id: Uuid) -> Result<Vec<Order>, ServiceError> {
        Ok(self.db_client.get_seller_orders(seller_id).await?)
    }

    pub async fn place_order(&self, session: &Session, dto: PlaceOrderDto) -> Result<Order, ServiceError> {
        dto.validate()?;

        let gig = self
            .db_client
            .get_gig(dto.gig_id)
            .await?
            .ok_or(ServiceError::GigNotFound(dto.gig_id))?;
        if !gig.is_active {
            tracing::warn!("Order rejected, gig {} is inactive", gig.id);
            return Err(ServiceError::GigInactive(gig.id));
        }

        let add_ons: Vec<GigAddOn> = dto
            .add_on_ids
            .iter()
            .map(|add_on_id| {
                gig.add_on(*add_on_id).cloned().ok_or_else(|| {
                    ServiceError::Validation(format!("add-on {} is not offered by this gig", add_on_id))
                })
            })
            .collect::<Result<_, _>>()?;

        let tier = gig.pricing.tier(dto.pricing_tier);
        let amount = currency::sum(
            std::iter::once(tier.price).chain(add_ons.iter().map(|add_on| add_on.price)),
        );
        let now = Utc::now();
        let delivery_date = add_ons
            .iter()
            .filter_map(|add_on| add_on.delivery_days)
            .try_fold(tier.delivery_days, u32::checked_add)
            .and_then(|days| now.checked_add_signed(Duration::days(i64::from(days))))
            .ok_or_else(|| ServiceError::Validation("delivery time is out of range".to_string()))?;

        let order = Order {
            id: Uuid::new_v4(),
            gig_id: gig.id,
            buyer_id: session.user_id,
            seller_id: gig.seller_id,
            pricing_tier: dto.pricing_tier,
            amount,
            add_ons,
            status: OrderStatus::Pending,
            requirements: dto.requirements,
            delivery_date,
            delivered_files: Vec::new(),
            delivery_note: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
            review_id: None,
        };

        let order = self.db_client.save_order(order).await?;
        self.db_client.increment_gig_orders(gig.id).await?;
        self.notification_service.notify_new_order(&order, &gig.title).await?;

        tracing::info!(
            "🛒 Order {} placed on gig {} for {}",
            order.id,
            gig.id,
            currency::format_amount(order.amount)
        );
        Ok(order)
    }

    /// Applies an order update from the buyer, the seller or an admin.
    pub async fn update_order(
        &self,
        session: &Session,
        order_id: Uuid,
        dto: UpdateOrderDto,
    ) -> Result<Order, ServiceError> {
        let order = self.get_order(order_id).await?;
        if !order.involves(session.user_id) && !session.is_admin() {
            tracing::warn!("User {} tried to update order {}", session.user_id, order_id);
            return Err(ServiceError::forbidden("only the order's parties can update it"));
        }
        dto.validate()?;

        let previous = order.status;
        let updated = self.db_client.update_order(order_id, dto).await?;

        if updated.status != previous {
            self.refresh_seller_performance(updated.seller_id).await?;
            for recipient in self.status_recipients(session, &updated) {
                self.notification_service
                    .notify_order_status(recipient, &updated, previous)
                    .await?;
            }
            tracing::info!(
                "Order {} moved from {} to {}",
                updated.id,
                previous.to_str(),
                updated.status.to_str()
            );
        }

        Ok(updated)
    }

    /// Recomputes and stores the seller's performance fields.
    pub async fn refresh_seller_performance(&self, seller_id: Uuid) -> Result<(), ServiceError> {
        let orders = self.db_client.get_seller_orders(seller_id).await?;
        let performance = seller_performance(&orders);

        match self.db_client.update_seller_performance(seller_id, performance).await {
            Ok(_) => Ok(()),
            // orders can outlive the seller account
            Err(error) => match ServiceError::from(error) {
                ServiceError::UserNotFound(_) => Ok(()),
                other => Err(other),
            },
        }
    }

    fn status_recipients(&self, session: &Session, order: &Order) -> Vec<Uuid> {
        if order.involves(session.user_id) {
            vec![order.counterparty(session.user_id)]
        } else {
            vec![order.buyer_id, order.seller_id]
        }
    }
}
