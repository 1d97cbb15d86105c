// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node expansion
//!
//! Pure function from a node list to desired resources: no I/O beyond the
//! log events on the span it is handed.

use tracing::{info, warn, Span};

use crate::domain::{DesiredResource, DesiredResourceSet, NodeSpec};

/// Expand each node into its desired resource, keyed by node name
///
/// Nodes are processed in order. A later node with an already-seen name
/// replaces the earlier one.
pub fn synthesize(nodes: &[NodeSpec], log: &Span) -> DesiredResourceSet {
    let mut desired = DesiredResourceSet::new();

    for node in nodes {
        if desired.insert(DesiredResource::from_node(node)).is_some() {
            warn!(parent: log, node = %node.name, "Duplicate node name, keeping the later definition");
        }
    }

    info!(parent: log, count = nodes.len(), "Added desired nodes");
    desired
}
