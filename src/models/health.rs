use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Vastu Architect AI Backend")]
    pub service: String,
}
