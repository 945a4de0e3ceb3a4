use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,

    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,

    #[serde(default)]
    pub files: Vec<String>,

    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the message travels between `a` and `b`, in either direction.
    pub fn between(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}
