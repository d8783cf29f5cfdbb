use std::collections::BTreeMap;

use crate::domain::value::{DeliveryStatusCode, MessageId, Msisdn};

#[derive(Debug, Clone, PartialEq)]
pub struct MessageStatus {
    pub text: String,
    pub status: DeliveryStatusCode,
    /// Unix timestamp (seconds) the message was created.
    pub created_time: i64,
    pub reply_number: String,
    pub credits_cost: f64,
    /// Unix timestamp (seconds) the message reached a final state, if it has.
    pub completed_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberInfo {
    /// Credits charged per message part to this number.
    pub price: f64,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub message_id: MessageId,
    pub from: Msisdn,
    /// Unix timestamp (seconds) the reply was received.
    pub timestamp: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    /// Messages still unread after this call.
    pub unread: u64,
    /// Up to 100 most recent replies newer than the requested id.
    pub messages: Vec<ReceivedMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendResponse {
    /// Message ids keyed by recipient.
    pub message_ids: BTreeMap<Msisdn, MessageId>,
    /// Text as sent, after any `cut_extra` truncation (taken from the first batch).
    pub sent_text: String,
    /// Parts per message (taken from the first batch).
    pub parts_count: u32,
}
