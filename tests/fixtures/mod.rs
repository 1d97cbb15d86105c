// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for function-xfabric
//!
//! Provides the example fabric used across the integration tests: two SR Linux
//! switches and one Linux server on two networks.

#![allow(dead_code)]

use serde_json::{json, Map, Value};

use function_xfabric::envelope::RunFunctionRequest;

pub const API_VERSION: &str = "netclab.github.io/v1alpha1";

pub const FIXED_TAG: &str = "01934f4a-c001-7000-8000-00000000c001";

/// Unwrap a JSON object literal
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {}", other),
    }
}

/// The example fabric's node list
pub fn example_nodes() -> Value {
    json!([
        {
            "name": "spine1",
            "type": "srlinux",
            "url": "gnmi://spine1.default.svc.cluster.local:9339",
            "interfaces": [{"name": "e1-49", "network": "s1"}]
        },
        {
            "name": "leaf1",
            "type": "srlinux",
            "url": "gnmi://leaf1.default.svc.cluster.local:9339",
            "interfaces": [
                {"name": "e1-49", "network": "s1"},
                {"name": "e1-1", "network": "l1"}
            ]
        },
        {
            "name": "srv1",
            "type": "linux",
            "url": "ssh://srv1.default.svc.cluster.local:22",
            "interfaces": [{"name": "eth1", "network": "l1"}]
        }
    ])
}

/// An XFabric composite with the given nodes
pub fn fabric_with_nodes(nodes: Value) -> Value {
    json!({
        "apiVersion": API_VERSION,
        "kind": "XFabric",
        "metadata": {"name": "example-fabric"},
        "spec": {
            "networks": [{"name": "s1"}, {"name": "l1"}],
            "nodes": nodes
        }
    })
}

/// The example XFabric composite
pub fn example_fabric() -> Value {
    fabric_with_nodes(example_nodes())
}

/// A request observing the given composite
pub fn request_for(composite: Value) -> RunFunctionRequest {
    RunFunctionRequest::for_composite(object(composite))
}

/// Desired resources expected from the example fabric, keyed by node name
pub fn expected_example_resources() -> Vec<(&'static str, Value)> {
    vec![
        (
            "spine1",
            json!({
                "apiVersion": API_VERSION,
                "kind": "Srlinux",
                "metadata": {"name": "spine1"},
                "spec": {
                    "forProvider": {"url": "gnmi://spine1.default.svc.cluster.local:9339"},
                    "interfaces": [{"name": "e1-49", "network": "s1"}]
                }
            }),
        ),
        (
            "leaf1",
            json!({
                "apiVersion": API_VERSION,
                "kind": "Srlinux",
                "metadata": {"name": "leaf1"},
                "spec": {
                    "forProvider": {"url": "gnmi://leaf1.default.svc.cluster.local:9339"},
                    "interfaces": [
                        {"name": "e1-49", "network": "s1"},
                        {"name": "e1-1", "network": "l1"}
                    ]
                }
            }),
        ),
        (
            "srv1",
            json!({
                "apiVersion": API_VERSION,
                "kind": "Linux",
                "metadata": {"name": "srv1"},
                "spec": {
                    "forProvider": {"url": "ssh://srv1.default.svc.cluster.local:22"},
                    "interfaces": [{"name": "eth1", "network": "l1"}]
                }
            }),
        ),
    ]
}
