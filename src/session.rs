//! Anonymous cart session context.
//!
//! A session identifier is generated once when the application starts and
//! lives only in memory: restarting the UI starts a fresh, empty cart.

use std::fmt;

use uuid::Uuid;

const SESSION_PREFIX: &str = "session_";
const SESSION_TOKEN_LEN: usize = 9;

/// Identifies the anonymous owner of a cart on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a fresh random identifier such as `session_3f9a1c07b`.
    pub fn generate() -> Self {
        let token: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(SESSION_TOKEN_LEN)
            .collect();

        Self(format!("{SESSION_PREFIX}{token}"))
    }

    /// Wraps an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_prefix_and_fixed_length() {
        let id = SessionId::generate();

        assert!(id.as_str().starts_with("session_"));
        assert_eq!(id.as_str().len(), SESSION_PREFIX.len() + SESSION_TOKEN_LEN);
        assert!(id.as_str()[SESSION_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
