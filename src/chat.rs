//! A stand-in for a chat assistant that answers every message with the same reply.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The reply sent for every message.
pub const CANNED_REPLY: &str = "This is a simulated reply. A real assistant would answer your \
    questions about your finances or our products here.";

/// The JSON body for sending a chat message.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: Option<String>,
}

/// The JSON body of a chat reply.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatReply {
    /// The assistant's answer.
    pub reply: String,
}

/// A route handler that answers any non-blank message with [CANNED_REPLY].
pub async fn chat_endpoint(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, Error> {
    let Json(request) =
        payload.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;

    match request.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => {
            tracing::debug!("received chat message of {} bytes", message.len());
            Ok(Json(ChatReply {
                reply: CANNED_REPLY.to_owned(),
            }))
        }
        _ => Err(Error::EmptyMessage),
    }
}
