use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequestDto {
    #[validate(range(min = 0.01, message = "Amount must be positive"))]
    pub amount: f64,

    /// Payout channel, e.g. "paypal" or "bank_transfer".
    #[validate(length(min = 1, message = "Withdrawal method is required"))]
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDto {
    pub completed_earnings: f64,
    pub withdrawn: f64,
    pub available: f64,
}
