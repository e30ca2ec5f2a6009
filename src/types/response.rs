use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response (deletes, enrollments)
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User 3 deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation for a removed row, e.g. `Book 4 deleted`
    pub fn deleted(entity: &str, id: i32) -> Self {
        Self::new(format!("{} {} deleted", entity, id))
    }
}
