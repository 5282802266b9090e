use knot_connector::{Connector, ConnectorConfig, Device, MemoryClient, SensorSchema};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dev-mode runner: wires the in-memory client to the connector and feeds it
/// loopback commands. A real deployment injects the platform's AMQP SDK
/// client instead.
#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let demo_device = Device {
        id: "abcdef1234568790".into(),
        name: "my-device".into(),
        schema: vec![SensorSchema {
            sensor_id: 0,
            type_id: 65521,
            value_type: 3,
            unit: 0,
            name: "bool-sensor".into(),
        }],
    };

    let config = ConnectorConfig::default();
    let update_event = config.update_event.clone();

    let client = Arc::new(MemoryClient::new(vec![demo_device.clone()]));
    let mut connector = Connector::with_config(client.clone(), config);

    info!("Connector starting (in-memory client)");
    if let Err(e) = connector.start().await {
        error!("Connector failed to start: {}", e);
        return;
    }
    info!("Listening on {} device(s)", connector.devices().len());

    // Feed loopback traffic so a dev run has something to show.
    let injector = client.clone();
    let device_id = demo_device.id.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(5));
        let mut toggle = false;
        loop {
            ticker.tick().await;
            toggle = !toggle;
            injector
                .inject_command(
                    &device_id,
                    &update_event,
                    json!({ "sensorId": 0, "value": toggle }),
                )
                .await;
        }
    });

    while let Some(cmd) = connector.recv().await {
        info!(
            "Command received: device={} event={} payload={}",
            cmd.device_id, cmd.event, cmd.payload
        );
    }

    error!("Command channel closed");
}
