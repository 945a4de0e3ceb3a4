// db/settingsdb.rs
use async_trait::async_trait;

use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::dtos::dashboarddtos::UpdateSettingsDto;
use crate::models::settingsmodel::PlatformSettings;

#[async_trait]
pub trait SettingsExt {
    /// Stored settings, or the defaults when none were ever saved.
    async fn get_settings(&self) -> Result<PlatformSettings, StorageError>;

    async fn update_settings(&self, changes: UpdateSettingsDto) -> Result<PlatformSettings, StorageError>;
}

#[async_trait]
impl SettingsExt for DBClient {
    async fn get_settings(&self) -> Result<PlatformSettings, StorageError> {
        Ok(self
            .get_object::<PlatformSettings>(keys::SETTINGS)
            .await?
            .unwrap_or_default())
    }

    async fn update_settings(&self, changes: UpdateSettingsDto) -> Result<PlatformSettings, StorageError> {
        self.update_object(keys::SETTINGS, move |settings: &mut PlatformSettings| {
            if let Some(rate) = changes.commission_rate {
                settings.commission_rate = rate;
            }
            if let Some(fee) = changes.withdrawal_fee {
                settings.withdrawal_fee = fee;
            }
            if let Some(price) = changes.featured_gig_price {
                settings.featured_gig_price = price;
            }
            if let Some(price) = changes.sponsored_listing_price {
                settings.sponsored_listing_price = price;
            }
            if let Some(price) = changes.pro_subscription_price {
                settings.pro_subscription_price = price;
            }
        })
        .await
    }
}
