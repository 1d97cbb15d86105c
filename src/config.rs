// Copyright (c) 2025 - Cowboy AI, Inc.
//! Function service configuration

use std::time::Duration;

use crate::errors::{TransportError, TransportResult};
use crate::nats::NatsConfig;

/// Default subject the function listens on
pub const DEFAULT_SUBJECT: &str = "functions.xfabric.run";

/// Default queue group, so replicas share the request load
pub const DEFAULT_QUEUE_GROUP: &str = "function-xfabric";

/// Configuration for the function service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Subject carrying `RunFunction` requests
    pub subject: String,
    /// Queue group to join, if any
    pub queue_group: Option<String>,
    /// Client name reported to NATS
    pub client_name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            subject: DEFAULT_SUBJECT.to_string(),
            queue_group: Some(DEFAULT_QUEUE_GROUP.to_string()),
            client_name: "function-xfabric".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl FunctionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> TransportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> TransportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let servers = lookup("NATS_URL")
            .map(|urls| {
                urls.split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|servers| !servers.is_empty())
            .unwrap_or(defaults.servers);

        let subject = lookup("FUNCTION_SUBJECT").unwrap_or(defaults.subject);

        let queue_group = match lookup("FUNCTION_QUEUE_GROUP") {
            Some(group) if group.is_empty() => None,
            Some(group) => Some(group),
            None => defaults.queue_group,
        };

        let client_name = lookup("FUNCTION_CLIENT_NAME").unwrap_or(defaults.client_name);

        let connect_timeout = match lookup("NATS_CONNECT_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                TransportError::Configuration(format!(
                    "NATS_CONNECT_TIMEOUT_SECS is not a number of seconds: {}",
                    secs
                ))
            })?,
            None => defaults.connect_timeout,
        };

        Ok(Self {
            servers,
            subject,
            queue_group,
            client_name,
            connect_timeout,
        })
    }

    /// Connection settings for the NATS client
    pub fn nats(&self) -> NatsConfig {
        NatsConfig {
            servers: self.servers.clone(),
            name: self.client_name.clone(),
            connect_timeout: self.connect_timeout,
        }
    }
}
