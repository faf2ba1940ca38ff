use crate::UserDto;
use serde::Serialize;

/// List of users plus total count
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub total_users: usize,
    pub all_users: Vec<UserDto>,
}
