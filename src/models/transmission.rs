use super::{Address, TransmissionStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transmission {
    pub id: String,
    pub created: i64,
    pub notification_id: String,
    pub subscription_name: String,
    pub channel: Address,
    pub status: TransmissionStatus,
    pub resend_count: i32,
    pub records: Vec<TransmissionRecord>,
}

/// Outcome of one delivery attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransmissionRecord {
    pub status: TransmissionStatus,
    pub response: String,
    pub sent: i64,
}
