// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric Domain Models
//!
//! Typed views of the documents the function reads and writes.
//!
//! - [`CompositeResource`] - the observed XFabric composite and its [`NodeSpec`] list
//! - [`ProviderKind`] - kind derived from a node's provider tag
//! - [`DesiredResource`] - one per-node manifest
//! - [`DesiredResourceSet`] - desired manifests keyed by node name

pub mod composite;
pub mod desired;
pub mod provider_kind;

pub use composite::{CompositeResource, CompositeSpec, NodeSpec, ObjectMeta};
pub use desired::{DesiredMeta, DesiredResource, DesiredResourceSet, DesiredSpec, ForProvider};
pub use provider_kind::ProviderKind;

/// The only composite apiVersion this function accepts; also stamped on every
/// desired resource
pub const API_VERSION: &str = "netclab.github.io/v1alpha1";

/// The only composite kind this function accepts
pub const COMPOSITE_KIND: &str = "XFabric";
