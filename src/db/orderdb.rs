// db/orderdb.rs
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::dtos::orderdtos::UpdateOrderDto;
use crate::models::ordermodel::{Order, OrderStatus};

impl Record for Order {
    const COLLECTION: &'static str = keys::ORDERS;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait OrderExt {
    async fn get_orders(&self) -> Result<Vec<Order>, StorageError>;

    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>, StorageError>;

    async fn get_buyer_orders(&self, buyer_id: Uuid) -> Result<Vec<Order>, StorageError>;

    async fn get_seller_orders(&self, seller_id: Uuid) -> Result<Vec<Order>, StorageError>;

    async fn save_order(&self, order: Order) -> Result<Order, StorageError>;

    /// Applies the supplied fields. Moving into `completed` stamps `completed_at`.
    async fn update_order(&self, order_id: Uuid, changes: UpdateOrderDto) -> Result<Order, StorageError>;

    async fn update_order_status(&self, order_id: Uuid, status: OrderStatus) -> Result<Order, StorageError>;

    async fn set_order_review(&self, order_id: Uuid, review_id: Uuid) -> Result<Order, StorageError>;
}

fn apply_status(order: &mut Order, status: OrderStatus) {
    if status == OrderStatus::Completed && order.status != OrderStatus::Completed {
        order.completed_at = Some(Utc::now());
    }
    order.status = status;
}

#[async_trait]
impl OrderExt for DBClient {
    async fn get_orders(&self) -> Result<Vec<Order>, StorageError> {
        Ok(self.load::<Order>().await?.into_vec())
    }

    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>, StorageError> {
        Ok(self.load::<Order>().await?.get(&order_id).cloned())
    }

    async fn get_buyer_orders(&self, buyer_id: Uuid) -> Result<Vec<Order>, StorageError> {
        let orders = self.load::<Order>().await?;
        Ok(orders.filter(|order| order.buyer_id == buyer_id))
    }

    async fn get_seller_orders(&self, seller_id: Uuid) -> Result<Vec<Order>, StorageError> {
        let orders = self.load::<Order>().await?;
        Ok(orders.filter(|order| order.seller_id == seller_id))
    }

    async fn save_order(&self, order: Order) -> Result<Order, StorageError> {
        self.mutate(move |orders: &mut Collection<Order>| {
            orders.insert(order.clone());
            Ok::<_, StorageError>(order)
        })
        .await
    }

    async fn update_order(&self, order_id: Uuid, changes: UpdateOrderDto) -> Result<Order, StorageError> {
        self.mutate(move |orders: &mut Collection<Order>| {
            orders.update(order_id, |order| {
                if let Some(status) = changes.status {
                    apply_status(order, status);
                }
                if let Some(requirements) = changes.requirements {
                    order.requirements = Some(requirements);
                }
                if let Some(delivery_date) = changes.delivery_date {
                    order.delivery_date = delivery_date;
                }
                if let Some(files) = changes.delivered_files {
                    order.delivered_files = files;
                }
                if let Some(note) = changes.delivery_note {
                    order.delivery_note = Some(note);
                }
                order.updated_at = Utc::now();
            })
        })
        .await
    }

    async fn update_order_status(&self, order_id: Uuid, status: OrderStatus) -> Result<Order, StorageError> {
        self.mutate(move |orders: &mut Collection<Order>| {
            orders.update(order_id, |order| {
                apply_status(order, status);
                order.updated_at = Utc::now();
            })
        })
        .await
    }

    async fn set_order_review(&self, order_id: Uuid, review_id: Uuid) -> Result<Order, StorageError> {
        self.mutate(move |orders: &mut Collection<Order>| {
            orders.update(order_id, |order| {
                order.review_id = Some(review_id);
                order.updated_at = Utc::now();
            })
        })
        .await
    }
}
