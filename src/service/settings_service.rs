// service/settings_service.rs
use std::sync::Arc;

use validator::Validate;

use crate::{
    db::{db::DBClient, settingsdb::SettingsExt},
    dtos::dashboarddtos::UpdateSettingsDto,
    models::{sessionmodel::Session, settingsmodel::PlatformSettings},
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct SettingsService {
    db_client: Arc<DBClient>,
}

impl SettingsService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn get_settings(&self) -> Result<PlatformSettings, ServiceError> {
        Ok(self.db_client.get_settings().await?)
    }

    pub async fn update_settings(
        &self,
        session: &Session,
        dto: UpdateSettingsDto,
    ) -> Result<PlatformSettings, ServiceError> {
        if !session.is_admin() {
            return Err(ServiceError::forbidden("only admins can change platform settings"));
        }
        dto.validate()?;

        let settings = self.db_client.update_settings(dto).await?;
        tracing::info!(
            "⚙️ Platform settings updated: commission {}, withdrawal fee {}",
            settings.commission_rate,
            settings.withdrawal_fee
        );
        Ok(settings)
    }
}
