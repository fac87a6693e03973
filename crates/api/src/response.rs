//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": ..., "data": T }` body returned by settings updates and
/// public form submissions.
#[derive(Debug, Serialize)]
pub struct MessageDataResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageDataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
