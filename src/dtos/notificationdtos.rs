use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::notificationmodel::NotificationType;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationDto {
    pub user_id: Uuid,

    #[serde(rename = "type")]
    pub kind: NotificationType,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(default)]
    pub link: Option<String>,
}
