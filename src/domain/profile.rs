//! Profile domain entity (one per user).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Mathematician and occasional poet")]
    pub bio: String,
    /// Owning user
    #[schema(example = 1)]
    pub user_id: i32,
}

/// Profile creation payload; both fields are required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProfile {
    pub bio: Option<String>,
    pub user_id: Option<i32>,
}

/// Profile update payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub user_id: Option<i32>,
}
