//! Connector error taxonomy
//!
//! Every failure originates in the wrapped client and is surfaced to the
//! caller with its message intact. Nothing is retried here; retry or
//! shutdown policy belongs to the caller.

use thiserror::Error;

/// Errors surfaced by the connector.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// The client failed to open the broker connection.
    #[error("{0}")]
    Connection(String),

    /// The client failed to list the registered devices.
    #[error("{0}")]
    DeviceList(String),

    /// A command-channel subscription could not be registered.
    #[error("{0}")]
    Subscription(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim_client_message() {
        let err = ConnectorError::Connection("fail to connect to AMQP channel".into());
        assert_eq!(err.to_string(), "fail to connect to AMQP channel");

        let err = ConnectorError::DeviceList("fail to list registered things from cloud".into());
        assert_eq!(err.to_string(), "fail to list registered things from cloud");
    }
}
