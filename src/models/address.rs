use super::HttpMethod;

pub const REST: &str = "REST";
pub const MQTT: &str = "MQTT";
pub const EMAIL: &str = "EMAIL";

/// Where a notification or interval action is delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Address {
    Rest(RestAddress),
    Mqtt(MqttPubAddress),
    Email(EmailAddress),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestAddress {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub http_method: HttpMethod,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MqttPubAddress {
    pub host: String,
    pub port: u16,
    pub publisher: String,
    pub topic: String,
    pub qos: u8,
    pub keep_alive: u32,
    pub retained: bool,
    pub auto_reconnect: bool,
    pub connect_timeout: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    pub recipients: Vec<String>,
}

impl Address {
    pub fn address_type(&self) -> &'static str {
        match self {
            Address::Rest(_) => REST,
            Address::Mqtt(_) => MQTT,
            Address::Email(_) => EMAIL,
        }
    }

    /// `host:port` of network addresses; `None` for email.
    pub fn authority(&self) -> Option<String> {
        match self {
            Address::Rest(a) => Some(format!("{}:{}", a.host, a.port)),
            Address::Mqtt(a) => Some(format!("{}:{}", a.host, a.port)),
            Address::Email(_) => None,
        }
    }
}
