use acct_store::UserFields;

use serde::Deserialize;

/// Full-replacement update: all three fields must be supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// All three fields, or `None` when any is missing or empty.
    pub fn into_fields(self) -> Option<UserFields> {
        match (self.username, self.email, self.password) {
            (Some(username), Some(email), Some(password))
                if !username.is_empty() && !email.is_empty() && !password.is_empty() =>
            {
                Some(UserFields {
                    username,
                    email,
                    password,
                })
            }
            _ => None,
        }
    }
}
