//! In-process client for development and tests
//!
//! Keeps a device registry and the registered command handlers in memory so
//! the full inbound path can be exercised without a broker. Not a broker
//! client; nothing leaves the process.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CloudClient, CommandHandler, InboundCommand};
use crate::device::{Device, SensorSchema};

/// Failure injection for the in-memory client.
#[derive(Debug, Clone, Default)]
pub struct MemoryClientOptions {
    /// When set, `connect` fails with this message.
    pub connect_err: Option<String>,
    /// When set, `get_devices` fails with this message.
    pub get_devices_err: Option<String>,
}

/// An in-process stand-in for the cloud SDK client.
pub struct MemoryClient {
    options: MemoryClientOptions,
    devices: RwLock<Vec<Device>>,
    /// Handlers keyed by (device id, event name).
    handlers: RwLock<HashMap<(String, String), CommandHandler>>,
    /// Data published per device, newest last.
    published: RwLock<HashMap<String, Vec<serde_json::Value>>>,
}

impl MemoryClient {
    /// Create a client seeded with the given registered devices.
    pub fn new(registered: Vec<Device>) -> Self {
        Self::with_options(registered, MemoryClientOptions::default())
    }

    /// Create a client with failure injection enabled.
    pub fn with_options(registered: Vec<Device>, options: MemoryClientOptions) -> Self {
        Self {
            options,
            devices: RwLock::new(registered),
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(HashMap::new()),
        }
    }

    /// Drive the handler registered for (device, event), if any.
    ///
    /// Returns whether a handler was invoked.
    pub async fn inject_command(
        &self,
        device_id: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> bool {
        let handlers = self.handlers.read().await;
        match handlers.get(&(device_id.to_string(), event.to_string())) {
            Some(handler) => {
                handler(InboundCommand {
                    device_id: device_id.to_string(),
                    event: event.to_string(),
                    payload,
                });
                true
            }
            None => false,
        }
    }

    /// Number of registered command handlers.
    pub async fn subscription_count(&self) -> usize {
        self.handlers.read().await.len()
    }

    /// Data published so far for one device, oldest first.
    pub async fn published_data(&self, device_id: &str) -> Vec<serde_json::Value> {
        self.published
            .read()
            .await
            .get(device_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl CloudClient for MemoryClient {
    async fn connect(&self) -> Result<()> {
        match &self.options.connect_err {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(()),
        }
    }

    async fn get_devices(&self) -> Result<Vec<Device>> {
        match &self.options.get_devices_err {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(self.devices.read().await.clone()),
        }
    }

    async fn on(&self, device_id: &str, event: &str, handler: CommandHandler) -> Result<()> {
        debug!("memory client: subscribe device={} event={}", device_id, event);
        self.handlers
            .write()
            .await
            .insert((device_id.to_string(), event.to_string()), handler);
        Ok(())
    }

    async fn register(&self, device: Device) -> Result<()> {
        let mut devices = self.devices.write().await;
        if devices.iter().any(|d| d.id == device.id) {
            return Err(anyhow!("device {} already registered", device.id));
        }
        devices.push(device);
        Ok(())
    }

    async fn unregister(&self, device_id: &str) -> Result<()> {
        let mut devices = self.devices.write().await;
        let before = devices.len();
        devices.retain(|d| d.id != device_id);
        if devices.len() == before {
            return Err(anyhow!("device {} not registered", device_id));
        }
        Ok(())
    }

    async fn update_schema(&self, device_id: &str, schema: Vec<SensorSchema>) -> Result<()> {
        let mut devices = self.devices.write().await;
        match devices.iter_mut().find(|d| d.id == device_id) {
            Some(device) => {
                device.schema = schema;
                Ok(())
            }
            None => Err(anyhow!("device {} not registered", device_id)),
        }
    }

    async fn publish_data(&self, device_id: &str, data: serde_json::Value) -> Result<()> {
        self.published
            .write()
            .await
            .entry(device_id.to_string())
            .or_default()
            .push(data);
        Ok(())
    }

    async fn unsubscribe(&self, device_id: &str, event: &str) -> Result<()> {
        self.handlers
            .write()
            .await
            .remove(&(device_id.to_string(), event.to_string()));
        Ok(())
    }
}
