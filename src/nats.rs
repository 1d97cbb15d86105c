// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS transport for the composition function
//!
//! `RunFunction` requests arrive as JSON on a request subject and are answered
//! on the message's reply subject with either a `RunFunctionResponse` or an
//! `ErrorReply`.

use async_nats::{Client, ConnectOptions, Message, Subscriber};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::FunctionConfig;
use crate::envelope::{ErrorReply, RunFunctionRequest};
use crate::errors::{StatusCode, TransportError, TransportResult};
use crate::function::FunctionRunner;

/// Configuration for NATS connection
#[derive(Debug, Clone)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "function-xfabric".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// NATS client wrapper
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
}

impl NatsClient {
    /// Connect with the given configuration
    pub async fn new(config: NatsConfig) -> TransportResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout);

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self { client })
    }

    /// Subscribe to a subject, optionally as part of a queue group
    pub async fn subscribe(
        &self,
        subject: &str,
        queue_group: Option<&str>,
    ) -> TransportResult<Subscriber> {
        let subscriber = match queue_group {
            Some(group) => {
                self.client
                    .queue_subscribe(subject.to_string(), group.to_string())
                    .await
            }
            None => self.client.subscribe(subject.to_string()).await,
        }
        .map_err(|e| TransportError::Subscribe(e.to_string()))?;

        info!(subject = %subject, queue_group = ?queue_group, "Subscribed");
        Ok(subscriber)
    }

    /// Publish a raw payload
    pub async fn publish(&self, subject: String, payload: Vec<u8>) -> TransportResult<()> {
        self.client
            .publish(subject.clone(), payload.into())
            .await
            .map_err(|e| TransportError::Publish(e.to_string()))?;

        debug!("Published message to subject: {}", subject);
        Ok(())
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Serves `RunFunction` over NATS request-reply
pub struct FunctionService {
    client: NatsClient,
    runner: FunctionRunner,
    subject: String,
    queue_group: Option<String>,
}

impl FunctionService {
    /// Create a service for the configured subject
    pub fn new(client: NatsClient, runner: FunctionRunner, config: &FunctionConfig) -> Self {
        Self {
            client,
            runner,
            subject: config.subject.clone(),
            queue_group: config.queue_group.clone(),
        }
    }

    /// Answer requests until the subscription ends
    ///
    /// Each request runs in its own task; nothing is shared between them
    /// except the stateless runner and the client handle.
    pub async fn serve(self) -> TransportResult<()> {
        let mut subscriber = self
            .client
            .subscribe(&self.subject, self.queue_group.as_deref())
            .await?;

        while let Some(message) = subscriber.next().await {
            let client = self.client.clone();
            let runner = self.runner;
            tokio::spawn(async move {
                if let Err(e) = reply(&client, &runner, message).await {
                    error!(error = %e, "Failed to reply to RunFunction request");
                }
            });
        }

        warn!(subject = %self.subject, "Subscription ended");
        Ok(())
    }
}

async fn reply(client: &NatsClient, runner: &FunctionRunner, message: Message) -> TransportResult<()> {
    let Some(reply_to) = message.reply else {
        warn!(subject = %message.subject, "Dropping RunFunction request without reply subject");
        return Ok(());
    };

    debug!(
        subject = %message.subject,
        payload_size = message.payload.len(),
        "Received RunFunction request"
    );

    let payload = handle_payload(runner, &message.payload);
    client.publish(reply_to.to_string(), payload).await
}

/// Decode a request, run the function, and encode the reply
///
/// Always produces a payload: failures become an encoded [`ErrorReply`].
pub fn handle_payload(runner: &FunctionRunner, payload: &[u8]) -> Vec<u8> {
    let request: RunFunctionRequest = match serde_json::from_slice(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Undecodable RunFunction request");
            return encode_error(StatusCode::InvalidArgument, format!("invalid request: {}", e));
        }
    };

    match runner.run_function(&request) {
        Ok(response) => match serde_json::to_vec(&response) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "Failed to encode RunFunction response");
                encode_error(StatusCode::Internal, format!("cannot encode response: {}", e))
            }
        },
        Err(e) => encode_error(e.status(), e.to_string()),
    }
}

fn encode_error(code: StatusCode, message: String) -> Vec<u8> {
    let reply = ErrorReply { code, message };
    match serde_json::to_vec(&reply) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Failed to encode error reply");
            Vec::new()
        }
    }
}
