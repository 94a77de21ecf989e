#![allow(dead_code)]
// Each integration test binary uses a different subset of these

pub const ADD_DEVICE: &str = r#"
{
    "apiVersion": "v2",
    "requestId": "2d1e1a3f-5b0a-4d8e-9f3c-6a2b7c1d0e4f",
    "device": {
        "name": "Modbus-TCP-Device",
        "description": "Power meter on the main feeder",
        "adminState": "LOCKED",
        "operatingState": "ENABLED",
        "labels": ["meter", "feeder-1"],
        "serviceName": "device-modbus",
        "profileName": "Modbus-TCP-Profile",
        "protocols": {
            "modbus-ip": {"Address": "10.0.0.10", "Port": "502", "UnitID": "1"}
        },
        "autoEvents": [
            {"frequency": "30s", "onChange": false, "resource": "Voltage"}
        ]
    }
}
"#;

pub const UPDATE_INTERVAL_NAME_ONLY: &str = r#"
{
    "apiVersion": "v2",
    "interval": {"name": "midnight"}
}
"#;

pub const ADD_EVENT: &str = r#"
{
    "apiVersion": "v2",
    "event": {
        "id": "6f1c2e0a-8d4b-4a7e-b5c3-1e9d2f8a7b60",
        "deviceName": "Modbus-TCP-Device",
        "profileName": "Modbus-TCP-Profile",
        "sourceName": "Voltage",
        "origin": 1700000000000000000,
        "readings": [
            {
                "id": "0b7e3a9c-2f4d-4c1e-8a6b-5d3f9e2c1a70",
                "origin": 1700000000000000000,
                "deviceName": "Modbus-TCP-Device",
                "resourceName": "Voltage",
                "profileName": "Modbus-TCP-Profile",
                "valueType": "Float32",
                "value": "2.301e+02"
            }
        ]
    }
}
"#;

pub const ADD_SUBSCRIPTIONS: &str = r#"
[
    {
        "apiVersion": "v2",
        "subscription": {
            "name": "ops-email",
            "receiver": "ops team",
            "channels": [{"type": "EMAIL", "recipients": ["ops@example.com"]}],
            "categories": ["HW_HEALTH"],
            "adminState": "UNLOCKED"
        }
    },
    {
        "apiVersion": "v2",
        "subscription": {
            "name": "alerts-webhook",
            "receiver": "alerting",
            "channels": [{"type": "REST", "host": "alerts.local", "port": 8080, "path": "/hook", "httpMethod": "POST"}],
            "labels": ["door"],
            "adminState": "UNLOCKED"
        }
    }
]
"#;

pub const SUBSCRIPTION_WITH_MQTT_CHANNEL: &str = r#"
{
    "apiVersion": "v2",
    "subscription": {
        "name": "mqtt-sub",
        "receiver": "broker",
        "channels": [{"type": "MQTT", "host": "broker.local", "port": 1883, "publisher": "scheduler", "topic": "alerts"}],
        "categories": ["SECURITY"],
        "adminState": "UNLOCKED"
    }
}
"#;
