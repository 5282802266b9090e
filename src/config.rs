//! Connector configuration

/// Configuration for the connector.
///
/// The two command-channel event names are owned by the cloud platform, not
/// by this crate, so they arrive as configuration rather than constants.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Event name for property-update commands sent to a device.
    pub update_event: String,
    /// Event name for data-request commands sent to a device.
    pub request_event: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            update_event: "update".into(),
            request_event: "request".into(),
        }
    }
}

impl ConnectorConfig {
    /// The command channels subscribed per device, in registration order.
    pub fn command_events(&self) -> [&str; 2] {
        [self.update_event.as_str(), self.request_event.as_str()]
    }
}
