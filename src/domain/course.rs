//! Course domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Math")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCourse {
    #[schema(example = "Math")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateCourse {
    pub title: Option<String>,
}
