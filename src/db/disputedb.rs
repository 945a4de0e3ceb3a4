// db/disputedb.rs
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::disputemodel::{Dispute, DisputeStatus};

impl Record for Dispute {
    const COLLECTION: &'static str = keys::DISPUTES;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait DisputeExt {
    async fn get_disputes(&self) -> Result<Vec<Dispute>, StorageError>;

    async fn get_dispute(&self, dispute_id: Uuid) -> Result<Option<Dispute>, StorageError>;

    async fn get_order_disputes(&self, order_id: Uuid) -> Result<Vec<Dispute>, StorageError>;

    async fn save_dispute(&self, dispute: Dispute) -> Result<Dispute, StorageError>;

    async fn update_dispute_status(
        &self,
        dispute_id: Uuid,
        status: DisputeStatus,
    ) -> Result<Dispute, StorageError>;

    async fn resolve_dispute(
        &self,
        dispute_id: Uuid,
        resolution: String,
        refund_amount: Option<f64>,
    ) -> Result<Dispute, StorageError>;
}

#[async_trait]
impl DisputeExt for DBClient {
    async fn get_disputes(&self) -> Result<Vec<Dispute>, StorageError> {
        Ok(self.load::<Dispute>().await?.into_vec())
    }

    async fn get_dispute(&self, dispute_id: Uuid) -> Result<Option<Dispute>, StorageError> {
        Ok(self.load::<Dispute>().await?.get(&dispute_id).cloned())
    }

    async fn get_order_disputes(&self, order_id: Uuid) -> Result<Vec<Dispute>, StorageError> {
        let disputes = self.load::<Dispute>().await?;
        Ok(disputes.filter(|dispute| dispute.order_id == order_id))
    }

    async fn save_dispute(&self, dispute: Dispute) -> Result<Dispute, StorageError> {
        self.mutate(move |disputes: &mut Collection<Dispute>| {
            disputes.insert(dispute.clone());
            Ok::<_, StorageError>(dispute)
        })
        .await
    }

    async fn update_dispute_status(
        &self,
        dispute_id: Uuid,
        status: DisputeStatus,
    ) -> Result<Dispute, StorageError> {
        self.mutate(move |disputes: &mut Collection<Dispute>| {
            disputes.update(dispute_id, |dispute| dispute.status = status)
        })
        .await
    }

    async fn resolve_dispute(
        &self,
        dispute_id: Uuid,
        resolution: String,
        refund_amount: Option<f64>,
    ) -> Result<Dispute, StorageError> {
        self.mutate(move |disputes: &mut Collection<Dispute>| {
            disputes.update(dispute_id, |dispute| {
                dispute.status = DisputeStatus::Resolved;
                dispute.resolution = Some(resolution);
                dispute.refund_amount = refund_amount;
                dispute.resolved_at = Some(Utc::now());
            })
        })
        .await
    }
}
