// Copyright (c) 2025 - Cowboy AI, Inc.
//! Desired Per-Node Resources
//!
//! A [`DesiredResource`] is the manifest one node expands into. The full set
//! produced for a composite is a [`DesiredResourceSet`], keyed by node name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::composite::NodeSpec;
use super::provider_kind::ProviderKind;
use super::API_VERSION;

/// Metadata of a desired resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredMeta {
    pub name: String,
}

/// Provider-facing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForProvider {
    pub url: String,
}

/// `spec` of a desired resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredSpec {
    pub interfaces: Vec<Value>,
    pub for_provider: ForProvider,
}

/// Manifest synthesized for a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredResource {
    pub api_version: String,
    pub kind: ProviderKind,
    pub metadata: DesiredMeta,
    pub spec: DesiredSpec,
}

impl DesiredResource {
    /// Build the manifest for a node
    pub fn from_node(node: &NodeSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: ProviderKind::from_type(&node.node_type),
            metadata: DesiredMeta {
                name: node.name.clone(),
            },
            spec: DesiredSpec {
                interfaces: node.interfaces.clone(),
                for_provider: ForProvider {
                    url: node.url.clone(),
                },
            },
        }
    }

    /// Node name this resource was built for
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Render as a generic document
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert("apiVersion".to_string(), json!(self.api_version));
        document.insert("kind".to_string(), json!(self.kind.as_str()));
        document.insert("metadata".to_string(), json!({ "name": self.metadata.name }));
        document.insert(
            "spec".to_string(),
            json!({
                "interfaces": self.spec.interfaces,
                "forProvider": { "url": self.spec.for_provider.url },
            }),
        );
        document
    }
}

/// Desired resources keyed by node name, in first-seen order
///
/// Inserting a name that is already present replaces the earlier resource
/// and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesiredResourceSet {
    resources: IndexMap<String, DesiredResource>,
}

impl DesiredResourceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource under its node name, returning the one it replaced
    pub fn insert(&mut self, resource: DesiredResource) -> Option<DesiredResource> {
        self.resources.insert(resource.name().to_string(), resource)
    }

    /// Look up a resource by node name
    pub fn get(&self, name: &str) -> Option<&DesiredResource> {
        self.resources.get(name)
    }

    /// Number of resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Node names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Iterate `(name, resource)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DesiredResource)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for DesiredResourceSet {
    type Item = (String, DesiredResource);
    type IntoIter = indexmap::map::IntoIter<String, DesiredResource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}
