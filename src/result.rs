use axum::Json;
use serde::{Deserialize, Serialize};

// 写操作的确认响应：{"message": "..."}
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self::new(message))
    }
}
