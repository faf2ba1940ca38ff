use acct_store::UserFields;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Username (required)
    #[serde(default)]
    pub username: Option<String>,

    /// Email, unique across accounts (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Password (required)
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterRequest {
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
