//! Student domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateStudent {
    #[schema(example = "Ana")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateStudent {
    pub name: Option<String>,
}
