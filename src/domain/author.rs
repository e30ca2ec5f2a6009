//! Author domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Orwell")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAuthor {
    #[schema(example = "Orwell")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
}
