//! Transport error type shared by every resource client.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures in three shapes: a `detail` string, an
//! `error` string, or a map of field names to message arrays (form
//! validation). All of that is sniffed exactly once, here, when the
//! error is constructed; stores consume a normalized message and never
//! look at response bodies themselves. The kind tag separates "server
//! answered with an error" from "request sent but nothing came back"
//! from "the request never left the client".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// A failed API call, normalized at the transport boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server responded with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("server error"))]
    Status {
        status: u16,
        /// Message extracted from the body at construction time.
        message: Option<String>,
        /// Raw body, kept for substring probes on distinguished cases.
        body: Value,
    },
    /// The request was sent but no response arrived.
    #[error("no response from server")]
    Network,
    /// The request never got off the ground (builder, serde, or
    /// pre-network validation failure).
    #[error("{0}")]
    Local(String),
}

impl ApiError {
    /// Build a `Status` error, extracting the human-readable message
    /// from the body once.
    pub fn status(status: u16, body: Value) -> Self {
        let message = extract_message(&body);
        Self::Status { status, message, body }
    }

    /// Build a `Local` error from a message.
    pub fn local(message: impl Into<String>) -> Self {
        Self::Local(message.into())
    }

    /// HTTP status code, when the server answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 401 response.
    pub fn is_unauthorized(&self) -> bool {
        self.http_status() == Some(401)
    }

    /// The extracted server message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Probe the extracted message and the raw body text for a
    /// substring. Used for distinguished error cases the backend spells
    /// inconsistently across fields.
    pub fn mentions(&self, needle: &str) -> bool {
        match self {
            Self::Status { message, body, .. } => {
                message.as_deref().is_some_and(|m| m.contains(needle))
                    || body.to_string().contains(needle)
            }
            Self::Network => false,
            Self::Local(message) => message.contains(needle),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // Fetch rejected: the request went out, nothing came back.
            gloo_net::Error::JsError(_) => Self::Network,
            gloo_net::Error::SerdeError(e) => Self::Local(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::Local(msg),
        }
    }
}

/// Extract a display message from an error body.
///
/// Precedence: `detail` string, then `error` string, then one line per
/// field for a validation map of `field: [messages]`.
fn extract_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_owned());
    }
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Some(error.to_owned());
    }
    let map = body.as_object()?;
    let mut lines = Vec::new();
    for (field, messages) in map {
        if let Some(items) = messages.as_array() {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                lines.push(format!("{field}: {joined}"));
            }
        }
    }
    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}
