//! Connector startup and command-listener wiring
//!
//! This module handles:
//! - Sequencing broker connection and per-device listener registration
//! - Forwarding inbound commands to the consumer
//! - Pass-through access to the client's device lifecycle operations

mod connector;

pub use connector::Connector;
