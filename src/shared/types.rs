use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of every error response.
///
/// `error` carries the underlying storage error text on 500s and is
/// omitted for client errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
