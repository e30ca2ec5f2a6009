//! Book domain entity (belongs to an author).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "1984")]
    pub title: String,
    #[schema(example = 1)]
    pub author_id: i32,
}

/// Book creation payload; `title` and `author_id` are required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    #[schema(example = "1984")]
    pub title: Option<String>,
    #[schema(example = 1)]
    pub author_id: Option<i32>,
}

/// Book update payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
}
