use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub esta_ativo: bool,
}

/// Body of the admin endpoint changing a user's status and role.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusDto {
    #[serde(default)]
    pub esta_ativo: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
}
