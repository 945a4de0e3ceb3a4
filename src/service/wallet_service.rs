// service/wallet_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{
        db::DBClient,
        orderdb::OrderExt,
        settingsdb::SettingsExt,
        walletdb::{available_balance, Reservation, WalletExt},
    },
    dtos::walletdtos::{BalanceDto, WithdrawalRequestDto},
    models::{
        ordermodel::OrderStatus,
        sessionmodel::Session,
        walletmodels::{Withdrawal, WithdrawalStatus},
    },
    service::{error::ServiceError, notification_service::NotificationService},
    utils::currency,
};

#[derive(Debug, Clone)]
pub struct WalletService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl WalletService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    /// Admins see every withdrawal, everyone else their own.
    pub async fn get_withdrawals(&self, session: &Session) -> Result<Vec<Withdrawal>, ServiceError> {
        if session.is_admin() {
            Ok(self.db_client.get_withdrawals().await?)
        } else {
            Ok(self.db_client.get_user_withdrawals(session.user_id).await?)
        }
    }

    pub async fn get_balance(&self, session: &Session) -> Result<BalanceDto, ServiceError> {
        let earnings = self.completed_earnings(session.user_id).await?;
        let withdrawals = self.db_client.get_user_withdrawals(session.user_id).await?;
        let available = available_balance(earnings, &withdrawals);

        Ok(BalanceDto {
            completed_earnings: earnings,
            withdrawn: currency::from_cents(currency::to_cents(earnings) - currency::to_cents(available)),
            available,
        })
    }

    pub async fn request_withdrawal(
        &self,
        session: &Session,
        dto: WithdrawalRequestDto,
    ) -> Result<Withdrawal, ServiceError> {
        dto.validate()?;

        let settings = self.db_client.get_settings().await?;
        let fee = settings.withdrawal_fee;
        if currency::to_cents(dto.amount) <= currency::to_cents(fee) {
            return Err(ServiceError::Validation(format!(
                "withdrawal must be more than the {} fee",
                currency::format_amount(fee)
            )));
        }

        let withdrawal = Withdrawal {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            amount: dto.amount,
            fee,
            net_amount: currency::from_cents(currency::to_cents(dto.amount) - currency::to_cents(fee)),
            method: dto.method,
            status: WithdrawalStatus::Pending,
            created_at: Utc::now(),
            processed_at: None,
        };

        let earnings = self.completed_earnings(session.user_id).await?;
        match self.db_client.reserve_withdrawal(withdrawal, earnings).await? {
            Reservation::Reserved(withdrawal) => {
                tracing::info!(
                    "💸 Withdrawal {} of {} requested by {}",
                    withdrawal.id,
                    currency::format_amount(withdrawal.amount),
                    withdrawal.user_id
                );
                Ok(withdrawal)
            }
            Reservation::Insufficient { available } => {
                tracing::warn!(
                    "Withdrawal of {} refused for {}, only {} available",
                    currency::format_amount(dto.amount),
                    session.user_id,
                    currency::format_amount(available)
                );
                Err(ServiceError::InsufficientBalance {
                    requested: dto.amount,
                    available,
                })
            }
        }
    }

    pub async fn process_withdrawal(
        &self,
        session: &Session,
        withdrawal_id: Uuid,
        status: WithdrawalStatus,
    ) -> Result<Withdrawal, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can process withdrawals"));
        }

        let withdrawal = self
            .db_client
            .update_withdrawal_status(withdrawal_id, status)
            .await?;
        self.notification_service
            .notify_withdrawal_processed(&withdrawal)
            .await?;

        tracing::info!("Withdrawal {} marked {}", withdrawal.id, withdrawal.status.to_str());
        Ok(withdrawal)
    }

    async fn completed_earnings(&self, seller_id: Uuid) -> Result<f64, ServiceError> {
        let orders = self.db_client.get_seller_orders(seller_id).await?;
        Ok(currency::sum(
            orders
                .iter()
                .filter(|order| order.status == OrderStatus::Completed)
                .map(|order| order.amount),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::orderdb::OrderExt;
    use crate::dtos::orderdtos::{PlaceOrderDto, UpdateOrderDto};
    use crate::models::{gigmodel::TierName, usermodel::UserRole};
    use crate::service::{order_service::OrderService, testutil};

    struct Setup {
        db: Arc<DBClient>,
        wallet: WalletService,
        seller: Session,
        admin: Session,
    }

    /// Seller with one completed 80.00 order.
    async fn setup() -> Setup {
        let db = testutil::db();
        let (_, buyer) = testutil::member(&db, UserRole::Buyer, "Bea").await;
        let (seller_user, seller) = testutil::member(&db, UserRole::Seller, "Sam").await;
        let (_, admin) = testutil::member(&db, UserRole::Admin, "Root").await;
        let gig = testutil::save_gig(&db, testutil::gig(seller_user.id, "Logo design", [40.0, 80.0, 150.0])).await;

        let notifications = Arc::new(NotificationService::new(db.clone()));
        let orders = OrderService::new(db.clone(), notifications.clone());
        let order = orders
            .place_order(&buyer, PlaceOrderDto::new(gig.id, TierName::Standard))
            .await
            .unwrap();
        orders
            .update_order(&seller, order.id, UpdateOrderDto::status(OrderStatus::Completed))
            .await
            .unwrap();

        Setup {
            wallet: WalletService::new(db.clone(), notifications),
            db,
            seller,
            admin,
        }
    }

    fn request(amount: f64) -> WithdrawalRequestDto {
        WithdrawalRequestDto {
            amount,
            method: "paypal".to_string(),
        }
    }

    #[tokio::test]
    async fn flat_fee_is_taken_from_the_amount() {
        let s = setup().await;

        let withdrawal = s.wallet.request_withdrawal(&s.seller, request(50.0)).await.unwrap();

        assert_eq!(withdrawal.fee, 2.5);
        assert_eq!(withdrawal.net_amount, 47.5);
        assert_eq!(withdrawal.status, WithdrawalStatus::Pending);

        let balance = s.wallet.get_balance(&s.seller).await.unwrap();
        assert_eq!(balance.completed_earnings, 80.0);
        assert_eq!(balance.withdrawn, 50.0);
        assert_eq!(balance.available, 30.0);
    }

    #[tokio::test]
    async fn cannot_withdraw_more_than_available() {
        let s = setup().await;
        s.wallet.request_withdrawal(&s.seller, request(50.0)).await.unwrap();

        let result = s.wallet.request_withdrawal(&s.seller, request(30.01)).await;
        assert!(matches!(
            result,
            Err(ServiceError::InsufficientBalance { available, .. }) if available == 30.0
        ));
        assert_eq!(s.db.get_user_withdrawals(s.seller.user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn amount_must_exceed_the_fee() {
        let s = setup().await;
        let result = s.wallet.request_withdrawal(&s.seller, request(2.5)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn rejected_withdrawals_release_funds() {
        let s = setup().await;
        let withdrawal = s.wallet.request_withdrawal(&s.seller, request(80.0)).await.unwrap();

        assert!(matches!(
            s.wallet.process_withdrawal(&s.seller, withdrawal.id, WithdrawalStatus::Completed).await,
            Err(ServiceError::Forbidden(_))
        ));

        let rejected = s
            .wallet
            .process_withdrawal(&s.admin, withdrawal.id, WithdrawalStatus::Rejected)
            .await
            .unwrap();
        assert!(rejected.processed_at.is_some());
        assert_eq!(s.wallet.get_balance(&s.seller).await.unwrap().available, 80.0);
        assert_eq!(s.wallet.get_withdrawals(&s.admin).await.unwrap().len(), 1);
        assert_eq!(s.db.get_seller_orders(s.seller.user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_withdrawal_is_not_found() {
        let s = setup().await;
        let result = s
            .wallet
            .process_withdrawal(&s.admin, Uuid::new_v4(), WithdrawalStatus::Completed)
            .await;
        assert!(matches!(result, Err(ServiceError::WithdrawalNotFound(_))));
    }
}
