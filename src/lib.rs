//! Thin adapter around an external cloud messaging SDK client
//!
//! The connector sequences broker connection and per-device command
//! subscriptions for an IoT device-management platform. All protocol work
//! (connection handling, channel multiplexing, framing) lives inside the
//! wrapped SDK, which is modelled as the [`CloudClient`] capability trait.

pub mod client;
pub mod config;
pub mod connector;
pub mod device;
pub mod error;

pub use client::{CloudClient, CommandHandler, InboundCommand, MemoryClient, MemoryClientOptions};
pub use config::ConnectorConfig;
pub use connector::Connector;
pub use device::{Device, SensorSchema};
pub use error::ConnectorError;
