use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response contract of the external user service, consumed for ownership
/// lookups at card creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub cardholder_name: String,
}
