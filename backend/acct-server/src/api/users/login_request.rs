use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email of the account (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Password to compare (required)
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Email and password, or `None` when either is missing or empty.
    pub fn into_credentials(self) -> Option<(String, String)> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}
