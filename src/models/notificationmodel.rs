use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Order,
    Message,
    Review,
    Dispute,
    System,
}

impl NotificationType {
    pub fn to_str(&self) -> &str {
        match self {
            NotificationType::Order => "order",
            NotificationType::Message => "message",
            NotificationType::Review => "review",
            NotificationType::Dispute => "dispute",
            NotificationType::System => "system",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
