//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids come from the external data source, so these are thin
//! wrappers around the original strings and are never generated locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A catalog identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(SubcategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_id_from_string() {
        let id: SubcategoryId = "rice".into();
        assert_eq!(id.as_str(), "rice");
        assert_eq!(id, "rice");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("grocery");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"grocery\"");
        let back: CategoryId = serde_json::from_str("\"grocery\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("p-789");
        assert_eq!(format!("{}", id), "p-789");
    }
}
