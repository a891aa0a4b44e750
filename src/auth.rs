//! Authenticated user value.
//!
//! The shell never looks inside the user; presence alone means "logged in".
//! Views that need details read them through the accessors below.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Local storage key for the persisted user (web target).
pub const USER_STORAGE_KEY: &str = "portal-current-user";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthUser(Value);

impl AuthUser {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// `id` field rendered as text, when present
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Best-effort name for greetings: `name`, then `email`, then `id`.
    pub fn display_name(&self) -> String {
        ["name", "email"]
            .iter()
            .find_map(|field| self.0.get(*field).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| self.id())
            .unwrap_or_else(|| "guest".to_string())
    }

    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    /// Parse a persisted user; empty or `null` payloads mean logged out.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Null) => None,
            Ok(value) => Some(Self(value)),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {}", e);
                None
            }
        }
    }
}
