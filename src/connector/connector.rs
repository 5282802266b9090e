//! Connector - sequences broker connection and per-device command listeners

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::{CloudClient, CommandHandler, InboundCommand};
use crate::config::ConnectorConfig;
use crate::device::{Device, SensorSchema};
use crate::error::ConnectorError;

/// Adapter around the cloud SDK client.
///
/// `start` brings the connector up in two steps: open the broker connection,
/// then attach two command listeners for every registered device. Failures
/// carry the client's message verbatim; the caller owns retry policy.
pub struct Connector {
    client: Arc<dyn CloudClient>,
    config: ConnectorConfig,
    /// Ordered device ids from the most recent successful listing.
    devices: Vec<String>,
    command_tx: mpsc::UnboundedSender<InboundCommand>,
    command_rx: mpsc::UnboundedReceiver<InboundCommand>,
}

impl Connector {
    /// Create a connector with the default command-channel names.
    pub fn new(client: Arc<dyn CloudClient>) -> Self {
        Self::with_config(client, ConnectorConfig::default())
    }

    /// Create a connector with explicit command-channel configuration.
    pub fn with_config(client: Arc<dyn CloudClient>, config: ConnectorConfig) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Self {
            client,
            config,
            devices: Vec::new(),
            command_tx,
            command_rx,
        }
    }

    /// Device ids captured by the most recent successful listing.
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Connect to the broker, then attach command listeners.
    ///
    /// The first failing step aborts the sequence: listeners are not
    /// attached after a failed connect.
    pub async fn start(&mut self) -> Result<(), ConnectorError> {
        self.connect_client().await?;
        self.listen_to_commands().await
    }

    /// Open the client's broker connection.
    pub async fn connect_client(&self) -> Result<(), ConnectorError> {
        self.client
            .connect()
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;

        info!("Connected to cloud broker");
        Ok(())
    }

    /// Fetch the registered devices and subscribe to both command channels
    /// on each of them.
    pub async fn listen_to_commands(&mut self) -> Result<(), ConnectorError> {
        let devices = self
            .client
            .get_devices()
            .await
            .map_err(|e| ConnectorError::DeviceList(e.to_string()))?;

        self.devices = devices.iter().map(|d| d.id.clone()).collect();
        info!("Listening for commands on {} device(s)", self.devices.len());

        for device in &devices {
            for event in self.config.command_events() {
                self.client
                    .on(&device.id, event, self.command_handler())
                    .await
                    .map_err(|e| ConnectorError::Subscription(e.to_string()))?;

                debug!("Subscribed: device={} event={}", device.id, event);
            }
        }

        Ok(())
    }

    /// Receive the next inbound command (blocks until one arrives).
    ///
    /// Returns `None` only if the connector itself has been torn down.
    pub async fn recv(&mut self) -> Option<InboundCommand> {
        self.command_rx.recv().await
    }

    /// Register a new device on the cloud.
    pub async fn register_device(&self, device: Device) -> Result<()> {
        debug!("Register device: {}", device.id);
        self.client.register(device).await
    }

    /// Remove a registered device.
    pub async fn unregister_device(&self, device_id: &str) -> Result<()> {
        debug!("Unregister device: {}", device_id);
        self.client.unregister(device_id).await
    }

    /// Replace a device's sensor schema.
    pub async fn update_schema(&self, device_id: &str, schema: Vec<SensorSchema>) -> Result<()> {
        debug!("Update schema: device={}", device_id);
        self.client.update_schema(device_id, schema).await
    }

    /// Publish sensor data on behalf of a device.
    pub async fn publish_data(&self, device_id: &str, data: serde_json::Value) -> Result<()> {
        debug!("Publish data: device={}", device_id);
        self.client.publish_data(device_id, data).await
    }

    /// Drop a previously registered event subscription.
    pub async fn unsubscribe(&self, device_id: &str, event: &str) -> Result<()> {
        debug!("Unsubscribe: device={} event={}", device_id, event);
        self.client.unsubscribe(device_id, event).await
    }

    /// Handler that forwards inbound commands to `recv`.
    fn command_handler(&self) -> CommandHandler {
        let tx = self.command_tx.clone();
        Arc::new(move |cmd| {
            // Receiver lives as long as the connector; a send failure just
            // means the consumer is gone.
            let _ = tx.send(cmd);
        })
    }
}
