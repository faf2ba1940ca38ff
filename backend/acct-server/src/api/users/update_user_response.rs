use crate::UserDto;
use serde::Serialize;

/// Updated user response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub updated_user: UserDto,
}
