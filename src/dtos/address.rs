use serde::{Deserialize, Serialize};

use crate::models::{Address, EmailAddress, HttpMethod, MqttPubAddress, RestAddress, EMAIL, MQTT, REST};
use crate::validation::{rules, Checker, Validate};

/// Delivery target, discriminated on the wire by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AddressDto {
    #[serde(rename = "REST")]
    Rest(RestAddressDto),
    #[serde(rename = "MQTT")]
    Mqtt(MqttPubAddressDto),
    #[serde(rename = "EMAIL")]
    Email(EmailAddressDto),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestAddressDto {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    pub http_method: HttpMethod,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MqttPubAddressDto {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub qos: u8,
    #[serde(default)]
    pub keep_alive: u32,
    #[serde(default)]
    pub retained: bool,
    #[serde(default)]
    pub auto_reconnect: bool,
    #[serde(default)]
    pub connect_timeout: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddressDto {
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl AddressDto {
    pub fn rest(host: impl Into<String>, port: u16, http_method: HttpMethod) -> Self {
        AddressDto::Rest(RestAddressDto {
            host: host.into(),
            port,
            path: String::new(),
            http_method,
        })
    }

    pub fn email<S: Into<String>>(recipients: impl IntoIterator<Item = S>) -> Self {
        AddressDto::Email(EmailAddressDto {
            recipients: recipients.into_iter().map(Into::into).collect(),
        })
    }

    pub fn address_type(&self) -> &'static str {
        match self {
            AddressDto::Rest(_) => REST,
            AddressDto::Mqtt(_) => MQTT,
            AddressDto::Email(_) => EMAIL,
        }
    }

    /// Record a violation at `field` unless this address is one of `allowed`.
    pub(crate) fn check_type(&self, check: &mut Checker<'_>, field: &str, allowed: &[&str]) {
        let kind = self.address_type();
        check.ensure(
            field,
            allowed.contains(&kind),
            format!("address type {} is not allowed here, expected one of {}", kind, allowed.join(", ")),
        );
    }
}

impl Validate for AddressDto {
    fn validate(&self, check: &mut Checker<'_>) {
        match self {
            AddressDto::Rest(rest) => {
                check.required("host", &rest.host);
                check.ensure("port", rest.port > 0, "must be greater than 0");
            }
            AddressDto::Mqtt(mqtt) => {
                check.required("host", &mqtt.host);
                check.ensure("port", mqtt.port > 0, "must be greater than 0");
                check.required("publisher", &mqtt.publisher);
                check.required("topic", &mqtt.topic);
                check.ensure("qos", mqtt.qos <= 2, "must be 0, 1 or 2");
            }
            AddressDto::Email(email) => {
                check.not_empty("recipients", &email.recipients);
                for (i, recipient) in email.recipients.iter().enumerate() {
                    check.rules(
                        &format!("recipients[{i}]"),
                        recipient,
                        &[rules::NONE_EMPTY_STRING, rules::EMAIL],
                    );
                }
            }
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        match dto {
            AddressDto::Rest(a) => Address::Rest(RestAddress {
                host: a.host,
                port: a.port,
                path: a.path,
                http_method: a.http_method,
            }),
            AddressDto::Mqtt(a) => Address::Mqtt(MqttPubAddress {
                host: a.host,
                port: a.port,
                publisher: a.publisher,
                topic: a.topic,
                qos: a.qos,
                keep_alive: a.keep_alive,
                retained: a.retained,
                auto_reconnect: a.auto_reconnect,
                connect_timeout: a.connect_timeout,
            }),
            AddressDto::Email(a) => Address::Email(EmailAddress {
                recipients: a.recipients,
            }),
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        match address {
            Address::Rest(a) => AddressDto::Rest(RestAddressDto {
                host: a.host,
                port: a.port,
                path: a.path,
                http_method: a.http_method,
            }),
            Address::Mqtt(a) => AddressDto::Mqtt(MqttPubAddressDto {
                host: a.host,
                port: a.port,
                publisher: a.publisher,
                topic: a.topic,
                qos: a.qos,
                keep_alive: a.keep_alive,
                retained: a.retained,
                auto_reconnect: a.auto_reconnect,
                connect_timeout: a.connect_timeout,
            }),
            Address::Email(a) => AddressDto::Email(EmailAddressDto {
                recipients: a.recipients,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrKind;
    use crate::validation::Validator;

    fn violations(address: &AddressDto) -> Vec<String> {
        match Validator::default().validate(address) {
            Ok(()) => vec![],
            Err(err) => {
                assert_eq!(err.kind(), ErrKind::ContractInvalid);
                err.violations().iter().map(|v| v.field.clone()).collect()
            }
        }
    }

    #[test]
    fn test_type_discriminator_selects_variant() {
        let rest: AddressDto = serde_json::from_str(
            r#"{"type":"REST","host":"localhost","port":48089,"httpMethod":"POST"}"#,
        )
        .unwrap();
        assert_eq!(rest, AddressDto::rest("localhost", 48089, HttpMethod::Post));

        let email: AddressDto =
            serde_json::from_str(r#"{"type":"EMAIL","recipients":["ops@example.com"]}"#).unwrap();
        assert_eq!(email.address_type(), EMAIL);

        assert!(serde_json::from_str::<AddressDto>(r#"{"type":"SMS","host":"x"}"#).is_err());
        assert!(serde_json::from_str::<AddressDto>(r#"{"host":"x","port":1}"#).is_err());
    }

    #[test]
    fn test_rest_requires_host_and_port() {
        let address = AddressDto::rest("", 0, HttpMethod::Get);
        assert_eq!(violations(&address), vec!["host", "port"]);
    }

    #[test]
    fn test_mqtt_rules() {
        let address = AddressDto::Mqtt(MqttPubAddressDto {
            host: "broker".to_string(),
            port: 1883,
            qos: 3,
            ..Default::default()
        });
        assert_eq!(violations(&address), vec!["publisher", "topic", "qos"]);
    }

    #[test]
    fn test_email_recipients() {
        assert_eq!(violations(&AddressDto::email(Vec::<String>::new())), vec!["recipients"]);
        assert_eq!(
            violations(&AddressDto::email(["ops@example.com", "nobody"])),
            vec!["recipients[1]"]
        );
    }

    #[test]
    fn test_serializes_type_inline() {
        let json = serde_json::to_value(AddressDto::rest("h", 80, HttpMethod::Put)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "REST", "host": "h", "port": 80, "httpMethod": "PUT"})
        );
    }
}
