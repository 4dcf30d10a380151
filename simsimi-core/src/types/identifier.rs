//! Session identifier handed out by the identity endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user id and session token pair
///
/// Obtained once from the identity endpoint and passed to every relay call.
/// The token is opaque: it is never parsed, validated or rewritten here.
/// Expiry is the service's concern and only surfaces as a relay error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    uid: i64,
    uuid: String,
}

impl Identifier {
    /// Create an identifier from its parts
    pub fn new(uid: i64, uuid: impl Into<String>) -> Self {
        Self {
            uid,
            uuid: uuid.into(),
        }
    }

    /// Numeric user id
    pub const fn uid(&self) -> i64 {
        self.uid
    }

    /// Opaque session token
    pub fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.uid, self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let id = Identifier::new(42, "a1b2-c3");
        assert_eq!(id.uid(), 42);
        assert_eq!(id.uuid(), "a1b2-c3");
        assert_eq!(id.to_string(), "42:a1b2-c3");
    }

    #[test]
    fn test_token_is_kept_verbatim() {
        let token = "  weird token/with?chars&=  ";
        let id = Identifier::new(-1, token);
        assert_eq!(id.uuid(), token);
    }

    #[test]
    fn test_serde_field_names() {
        let id = Identifier::new(7, "tok");
        let value = serde_json::to_value(&id).unwrap();
        assert_eq!(value, serde_json::json!({"uid": 7, "uuid": "tok"}));

        let back: Identifier = serde_json::from_value(value).unwrap();
        assert_eq!(back, id);
    }
}
