// db/walletdb.rs
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::models::walletmodels::{Withdrawal, WithdrawalStatus};
use crate::utils::currency;

impl Record for Withdrawal {
    const COLLECTION: &'static str = keys::WITHDRAWALS;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Outcome of trying to set money aside for a withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub enum Reservation {
    Reserved(Withdrawal),
    Insufficient { available: f64 },
}

/// Earnings not yet claimed by a pending, processing or completed withdrawal.
pub fn available_balance<'a, I>(earnings: f64, withdrawals: I) -> f64
where
    I: IntoIterator<Item = &'a Withdrawal>,
{
    let held: i64 = withdrawals
        .into_iter()
        .filter(|withdrawal| withdrawal.holds_funds())
        .map(|withdrawal| currency::to_cents(withdrawal.amount))
        .sum();
    currency::from_cents(currency::to_cents(earnings) - held)
}

#[async_trait]
pub trait WalletExt {
    async fn get_withdrawals(&self) -> Result<Vec<Withdrawal>, StorageError>;

    async fn get_user_withdrawals(&self, user_id: Uuid) -> Result<Vec<Withdrawal>, StorageError>;

    async fn get_withdrawal(&self, withdrawal_id: Uuid) -> Result<Option<Withdrawal>, StorageError>;

    async fn save_withdrawal(&self, withdrawal: Withdrawal) -> Result<Withdrawal, StorageError>;

    /// Stores `withdrawal` only if the user's balance against `earnings`
    /// covers it. Check and insert happen under one write.
    async fn reserve_withdrawal(
        &self,
        withdrawal: Withdrawal,
        earnings: f64,
    ) -> Result<Reservation, StorageError>;

    /// Sets the status and stamps `processed_at`.
    async fn update_withdrawal_status(
        &self,
        withdrawal_id: Uuid,
        status: WithdrawalStatus,
    ) -> Result<Withdrawal, StorageError>;
}

#[async_trait]
impl WalletExt for DBClient {
    async fn get_withdrawals(&self) -> Result<Vec<Withdrawal>, StorageError> {
        Ok(self.load::<Withdrawal>().await?.into_vec())
    }

    async fn get_user_withdrawals(&self, user_id: Uuid) -> Result<Vec<Withdrawal>, StorageError> {
        let withdrawals = self.load::<Withdrawal>().await?;
        Ok(withdrawals.filter(|withdrawal| withdrawal.user_id == user_id))
    }

    async fn get_withdrawal(&self, withdrawal_id: Uuid) -> Result<Option<Withdrawal>, StorageError> {
        Ok(self.load::<Withdrawal>().await?.get(&withdrawal_id).cloned())
    }

    async fn save_withdrawal(&self, withdrawal: Withdrawal) -> Result<Withdrawal, StorageError> {
        self.mutate(move |withdrawals: &mut Collection<Withdrawal>| {
            withdrawals.insert(withdrawal.clone());
            Ok::<_, StorageError>(withdrawal)
        })
        .await
    }

    async fn reserve_withdrawal(
        &self,
        withdrawal: Withdrawal,
        earnings: f64,
    ) -> Result<Reservation, StorageError> {
        self.mutate(move |withdrawals: &mut Collection<Withdrawal>| {
            let user_id = withdrawal.user_id;
            let available = available_balance(
                earnings,
                withdrawals.iter().filter(|existing| existing.user_id == user_id),
            );

            if currency::to_cents(withdrawal.amount) > currency::to_cents(available) {
                return Ok::<_, StorageError>(Reservation::Insufficient { available });
            }

            withdrawals.insert(withdrawal.clone());
            Ok(Reservation::Reserved(withdrawal))
        })
        .await
    }

    async fn update_withdrawal_status(
        &self,
        withdrawal_id: Uuid,
        status: WithdrawalStatus,
    ) -> Result<Withdrawal, StorageError> {
        self.mutate(move |withdrawals: &mut Collection<Withdrawal>| {
            withdrawals.update(withdrawal_id, |withdrawal| {
                withdrawal.status = status;
                withdrawal.processed_at = Some(Utc::now());
            })
        })
        .await
    }
}
