// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Node Synthesis
//!
//! Generates arbitrary fabrics and checks that the function's response keeps
//! one resource per distinct node name, derives kinds by capitalization only,
//! and carries urls and interfaces through untouched.

use function_xfabric::envelope::RunFunctionRequest;
use function_xfabric::FunctionRunner;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

// ============================================================================
// Strategies
// ============================================================================

fn node_name() -> impl Strategy<Value = String> {
    // Small alphabet so duplicate names come up regularly
    "(spine|leaf|srv)[1-4]"
}

fn node_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("srlinux".to_string()),
        Just("linux".to_string()),
        "[a-z][a-z0-9]{0,10}",
    ]
}

fn interface() -> impl Strategy<Value = Value> {
    ("e[0-9]-[0-9]{1,2}", "[a-z][0-9]").prop_map(|(name, network)| {
        json!({"name": name, "network": network})
    })
}

fn node() -> impl Strategy<Value = Value> {
    (
        node_name(),
        node_type(),
        "(gnmi|ssh)://[a-z0-9]{1,8}:[0-9]{2,5}",
        prop::collection::vec(interface(), 0..4),
    )
        .prop_map(|(name, node_type, url, interfaces)| {
            json!({
                "name": name,
                "type": node_type,
                "url": url,
                "interfaces": interfaces
            })
        })
}

fn fabric_nodes() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(node(), 0..12)
}

fn request(nodes: &[Value]) -> RunFunctionRequest {
    let composite = json!({
        "apiVersion": "netclab.github.io/v1alpha1",
        "kind": "XFabric",
        "metadata": {"name": "generated"},
        "spec": {"nodes": nodes}
    });
    RunFunctionRequest::for_composite(composite.as_object().cloned().unwrap_or_default())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The last definition of each node name
fn last_definitions(nodes: &[Value]) -> HashMap<String, Value> {
    let mut last = HashMap::new();
    for node in nodes {
        last.insert(node["name"].as_str().unwrap_or_default().to_string(), node.clone());
    }
    last
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: one desired resource per distinct node name
    #[test]
    fn prop_one_resource_per_distinct_name(nodes in fabric_nodes()) {
        let response = FunctionRunner::new().run_function(&request(&nodes)).unwrap();

        let distinct: HashSet<&str> = nodes.iter().filter_map(|n| n["name"].as_str()).collect();
        let keys: HashSet<&str> = response.desired.resources.keys().map(String::as_str).collect();

        prop_assert_eq!(keys, distinct);
    }

    /// Property: each resource mirrors the last node with its name
    #[test]
    fn prop_resource_mirrors_last_definition(nodes in fabric_nodes()) {
        let response = FunctionRunner::new().run_function(&request(&nodes)).unwrap();

        for (name, node) in last_definitions(&nodes) {
            let resource: &Map<String, Value> = &response.desired.resources[&name].resource;
            let node_type = node["type"].as_str().unwrap_or_default();

            prop_assert_eq!(&resource["kind"], &json!(capitalize(node_type)));
            prop_assert_eq!(&resource["metadata"]["name"], &json!(name));
            prop_assert_eq!(&resource["spec"]["forProvider"]["url"], &node["url"]);
            prop_assert_eq!(&resource["spec"]["interfaces"], &node["interfaces"]);
            prop_assert_eq!(&resource["apiVersion"], &json!("netclab.github.io/v1alpha1"));
        }
    }

    /// Property: kind differs from type only in its first character
    #[test]
    fn prop_kind_only_changes_first_character(nodes in fabric_nodes()) {
        let response = FunctionRunner::new().run_function(&request(&nodes)).unwrap();

        for (name, node) in last_definitions(&nodes) {
            let node_type = node["type"].as_str().unwrap_or_default();
            let kind = response.desired.resources[&name].resource["kind"]
                .as_str()
                .unwrap_or_default()
                .to_string();

            let tail: String = node_type.chars().skip(1).collect();
            prop_assert!(kind.ends_with(&tail));
            prop_assert!(kind.chars().next().map_or(false, |c| !c.is_lowercase()));
        }
    }

    /// Property: every success carries a 60 second TTL
    #[test]
    fn prop_ttl_is_sixty_seconds(nodes in fabric_nodes()) {
        let response = FunctionRunner::new().run_function(&request(&nodes)).unwrap();
        prop_assert_eq!(response.meta.ttl, Duration::from_secs(60));
    }

    /// Property: the function is deterministic
    #[test]
    fn prop_is_deterministic(nodes in fabric_nodes()) {
        let runner = FunctionRunner::new();
        let first = runner.run_function(&request(&nodes)).unwrap();
        let second = runner.run_function(&request(&nodes)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a foreign apiVersion is always rejected, whatever the kind
    #[test]
    fn prop_foreign_api_version_rejected(
        api_version in "[a-z]{1,8}\\.io/v[0-9]",
        kind in "X[A-Za-z]{0,8}",
        nodes in fabric_nodes(),
    ) {
        let mut req = request(&nodes);
        if let Some(composite) = req.observed.composite.as_mut() {
            composite.resource.insert("apiVersion".to_string(), json!(api_version));
            composite.resource.insert("kind".to_string(), json!(kind));
        }

        let result = FunctionRunner::new().run_function(&req);
        prop_assert!(result.is_err());
        prop_assert_eq!(
            result.unwrap_err().status(),
            function_xfabric::StatusCode::InvalidArgument
        );
    }
}
