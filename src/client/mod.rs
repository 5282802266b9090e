//! Capability abstraction for the external cloud messaging SDK client
//!
//! The connector treats the SDK as an opaque collaborator: connection
//! handling, channel multiplexing and message framing all live behind this
//! trait. An in-memory implementation is provided for development and tests.

pub mod memory;

pub use memory::{MemoryClient, MemoryClientOptions};

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::device::{Device, SensorSchema};

/// A command delivered on a device-scoped channel.
#[derive(Debug, Clone)]
pub struct InboundCommand {
    /// Id of the device the command is addressed to.
    pub device_id: String,
    /// The command channel the message arrived on.
    pub event: String,
    /// Opaque command payload, owned by the cloud platform.
    pub payload: serde_json::Value,
}

/// Callback invoked by the client when a command arrives on a subscribed
/// channel.
pub type CommandHandler = Arc<dyn Fn(InboundCommand) + Send + Sync>;

/// Capability set of the wrapped cloud SDK client.
///
/// Every operation is an asynchronous point-to-point call into the SDK;
/// failures carry a human-readable message from the client.
#[async_trait]
pub trait CloudClient: Send + Sync {
    /// Open the broker connection.
    async fn connect(&self) -> Result<()>;

    /// List the devices registered on the cloud.
    async fn get_devices(&self) -> Result<Vec<Device>>;

    /// Register a callback for a named event scoped to one device.
    async fn on(&self, device_id: &str, event: &str, handler: CommandHandler) -> Result<()>;

    /// Register a new device on the cloud.
    async fn register(&self, device: Device) -> Result<()>;

    /// Remove a registered device.
    async fn unregister(&self, device_id: &str) -> Result<()>;

    /// Replace a device's sensor schema.
    async fn update_schema(&self, device_id: &str, schema: Vec<SensorSchema>) -> Result<()>;

    /// Publish sensor data on behalf of a device.
    async fn publish_data(&self, device_id: &str, data: serde_json::Value) -> Result<()>;

    /// Drop a previously registered event subscription.
    async fn unsubscribe(&self, device_id: &str, event: &str) -> Result<()>;
}
