pub mod health;
pub mod person;
pub mod root;
pub mod task;

use serde::Serialize;

/// Fixed-message response body for delete endpoints. Returned whether or
/// not the target node existed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
