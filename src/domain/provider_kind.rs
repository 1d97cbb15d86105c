// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Kind Value Object
//!
//! A node's lowercase provider tag (`srlinux`, `linux`, ...) names the kind of
//! the managed resource a downstream provider reconciles. The kind is the tag
//! with its first character upper-cased and everything after it untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a desired per-node resource
///
/// Any provider tag is accepted; there is no allow-list of known providers.
/// Empty tags are refused earlier, when the node is decoded.
///
/// # Examples
///
/// ```rust
/// use function_xfabric::domain::ProviderKind;
///
/// assert_eq!(ProviderKind::from_type("srlinux").as_str(), "Srlinux");
/// assert_eq!(ProviderKind::from_type("linux").as_str(), "Linux");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderKind(String);

impl ProviderKind {
    /// Derive the kind from a node's provider tag
    pub fn from_type(node_type: &str) -> Self {
        let mut chars = node_type.chars();
        let kind: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Self(kind)
    }

    /// Get the kind as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProviderKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
