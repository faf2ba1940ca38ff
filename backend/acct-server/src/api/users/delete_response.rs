use serde::Serialize;

/// Deletion confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
