//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Unique login name
    #[schema(example = "ana")]
    pub username: String,
}

/// User creation payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Required
    #[schema(example = "ana")]
    pub username: Option<String>,
}

/// User update payload (only supplied fields change)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[schema(example = "ana.maria")]
    pub username: Option<String>,
}
