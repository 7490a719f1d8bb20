use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Plain confirmation body, e.g. `{"message": "Review removed"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}
