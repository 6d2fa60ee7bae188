use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the root greeting
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RootResponse {
    #[schema(example = "Vastu Architect AI Backend is running")]
    pub message: String,
}
