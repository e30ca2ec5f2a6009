//! Custom request extractors.

mod entity_id;
mod json_body;

pub use entity_id::EntityId;
pub use json_body::JsonBody;
