use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("blank_message"));
    }
    Ok(())
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub receiver_id: Uuid,

    #[serde(default)]
    pub order_id: Option<Uuid>,

    #[validate(custom = "validate_not_blank", length(max = 10000, message = "Message is too long"))]
    pub content: String,

    #[serde(default)]
    pub files: Vec<String>,
}

impl SendMessageDto {
    pub fn text(receiver_id: Uuid, content: impl Into<String>) -> Self {
        SendMessageDto {
            receiver_id,
            order_id: None,
            content: content.into(),
            files: Vec::new(),
        }
    }
}
