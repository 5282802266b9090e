//! Device domain model passed through from the cloud SDK
//!
//! The connector only consumes device ids; the schema travels with the
//! device as opaque pass-through data owned by the cloud platform.

use serde::{Deserialize, Serialize};

/// One sensor descriptor inside a device schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSchema {
    pub sensor_id: u32,
    pub type_id: u32,
    pub value_type: u32,
    pub unit: u32,
    pub name: String,
}

/// A device registered on the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub schema: Vec<SensorSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_deserializes_cloud_payload() {
        let raw = r#"{
            "id": "abcdef1234568790",
            "name": "my-device",
            "schema": [
                {
                    "sensorId": 0,
                    "typeId": 65521,
                    "valueType": 3,
                    "unit": 0,
                    "name": "bool-sensor"
                }
            ]
        }"#;

        let device: Device = serde_json::from_str(raw).unwrap();
        assert_eq!(device.id, "abcdef1234568790");
        assert_eq!(device.schema.len(), 1);
        assert_eq!(device.schema[0].type_id, 65521);
        assert_eq!(device.schema[0].name, "bool-sensor");
    }

    #[test]
    fn test_device_schema_defaults_to_empty() {
        let device: Device =
            serde_json::from_str(r#"{"id": "0123", "name": "bare"}"#).unwrap();
        assert!(device.schema.is_empty());
    }
}
