use crate::UserDto;
use serde::Serialize;

/// Freshly registered user response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub new_user: UserDto,
}
