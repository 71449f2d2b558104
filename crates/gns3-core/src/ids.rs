//! Strongly-typed identifiers for GNS3 resources.
//!
//! Identifiers are opaque strings assigned by the server. The only invariant the
//! client enforces is that an identifier used in a request path is non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Macro to generate string identifier wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $empty:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier string without validating it.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates a random identifier (UUID v4).
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }

            /// Returns true if the identifier is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Checks that a raw identifier is usable in a request path.
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`Error::", stringify!($empty), "`] if `id` is empty.")]
            pub fn require(id: &str) -> Result<&str> {
                if id.is_empty() {
                    Err(Error::$empty)
                } else {
                    Ok(id)
                }
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::require(s).map(Self::new)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type!(ProjectId, EmptyProjectId, "Project identifier");
id_type!(NodeId, EmptyNodeId, "Node identifier");
id_type!(LinkId, EmptyLinkId, "Link identifier");

/// Checks that a relative file path is usable in a request path.
///
/// # Errors
///
/// Returns [`Error::EmptyFilePath`] if `path` is empty.
pub fn require_file_path(path: &str) -> Result<&str> {
    if path.is_empty() {
        Err(Error::EmptyFilePath)
    } else {
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_project_id_new() {
        let id = ProjectId::new(PROJECT);
        assert_eq!(id.as_str(), PROJECT);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_project_id_new_v4_is_uuid() {
        let id = ProjectId::new_v4();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_require_rejects_empty() {
        assert!(matches!(ProjectId::require(""), Err(Error::EmptyProjectId)));
        assert!(matches!(NodeId::require(""), Err(Error::EmptyNodeId)));
        assert!(matches!(LinkId::require(""), Err(Error::EmptyLinkId)));
        assert_eq!(NodeId::require("n1").unwrap(), "n1");
    }

    #[test]
    fn test_from_str_rejects_empty() {
        let result: Result<LinkId> = "".parse();
        assert!(matches!(result, Err(Error::EmptyLinkId)));

        let id: LinkId = "l1".parse().unwrap();
        assert_eq!(id.to_string(), "l1");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(NodeId::default().is_empty());
    }

    #[test]
    fn test_conversions() {
        let id: NodeId = "node-1".into();
        let from_string: NodeId = String::from("node-1").into();
        assert_eq!(id, from_string);

        let raw: String = id.clone().into();
        assert_eq!(raw, "node-1");
        assert_eq!(id.into_string(), "node-1");
    }

    #[test]
    fn test_as_ref() {
        fn takes_str(value: impl AsRef<str>) -> usize {
            value.as_ref().len()
        }
        assert_eq!(takes_str(ProjectId::new("abc")), 3);
        assert_eq!(takes_str(&ProjectId::new("abcd")), 4);
    }

    #[test]
    fn test_serialize_transparent() {
        let id = ProjectId::new(PROJECT);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{PROJECT}\""));

        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_require_file_path() {
        assert!(matches!(require_file_path(""), Err(Error::EmptyFilePath)));
        assert_eq!(require_file_path("configs/startup.vpc").unwrap(), "configs/startup.vpc");
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeId::new("a"));
        set.insert(NodeId::new("b"));
        set.insert(NodeId::new("a"));
        assert_eq!(set.len(), 2);
    }
}
