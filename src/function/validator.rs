// Copyright (c) 2025 - Cowboy AI, Inc.
//! Composite schema identity check

use serde_json::{Map, Value};
use tracing::{error, Span};

use crate::domain::{API_VERSION, COMPOSITE_KIND};
use crate::errors::{FunctionError, FunctionResult};

/// Check that the observed composite is an `XFabric` of the supported version
///
/// apiVersion is checked before kind, so a document wrong on both counts is
/// always reported as an unsupported apiVersion. An absent field is reported
/// with an empty value.
pub fn validate(composite: &Map<String, Value>, log: &Span) -> FunctionResult<()> {
    let api_version = field_text(composite, "apiVersion");
    if api_version != API_VERSION {
        error!(parent: log, api_version = %api_version, "Unsupported composite apiVersion");
        return Err(FunctionError::UnsupportedApiVersion(api_version));
    }

    let kind = field_text(composite, "kind");
    if kind != COMPOSITE_KIND {
        error!(parent: log, kind = %kind, "Unsupported composite kind");
        return Err(FunctionError::UnsupportedKind(kind));
    }

    Ok(())
}

/// Text of a top-level field; non-string values are rendered as JSON
fn field_text(document: &Map<String, Value>, field: &str) -> String {
    match document.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
