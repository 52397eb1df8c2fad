//! Cache keys: operation identity plus serialized arguments

use serde::Serialize;

/// Key prefix shared by every entry this crate writes
const KEY_PREFIX: &str = "textvault";

/// Composite cache key for a memoized operation call.
///
/// Identity is the operation name plus the JSON-serialized argument list, so
/// two calls collide exactly when they are the same operation invoked with
/// equal arguments. Owner ids are part of the argument list, which keeps
/// entries owner-scoped.
#[derive(Debug, Clone)]
pub struct CacheKey {
    operation: &'static str,
    args: Vec<serde_json::Value>,
}

impl CacheKey {
    /// Start a key for the named operation
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            args: Vec::new(),
        }
    }

    /// Append an argument to the key's identity
    pub fn arg<T: Serialize>(mut self, value: &T) -> Self {
        // Serialization of ids and strings cannot fail; a non-serializable
        // argument is a programming error caught by tests.
        let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
        self.args.push(json);
        self
    }

    /// Operation name this key was built for
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Render the storable key string
    pub fn render(&self) -> String {
        let args = serde_json::Value::Array(self.args.clone());
        format!("{}:{}:{}", KEY_PREFIX, self.operation, args)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, UserId};

    #[test]
    fn test_same_call_same_key() {
        let doc = DocumentId::new();
        let user = UserId::new();
        let a = CacheKey::new("text.word_count").arg(&doc).arg(&user);
        let b = CacheKey::new("text.word_count").arg(&doc).arg(&user);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_operation_and_arguments_disambiguate() {
        let doc = DocumentId::new();
        let user_a = UserId::new();
        let user_b = UserId::new();

        let words = CacheKey::new("text.word_count").arg(&doc).arg(&user_a);
        let chars = CacheKey::new("text.character_count").arg(&doc).arg(&user_a);
        let other_owner = CacheKey::new("text.word_count").arg(&doc).arg(&user_b);

        assert_ne!(words.render(), chars.render());
        assert_ne!(words.render(), other_owner.render());
    }

    #[test]
    fn test_render_shape() {
        let key = CacheKey::new("text.get").arg(&"abc");
        assert_eq!(key.render(), r#"textvault:text.get:["abc"]"#);
    }
}
