use std::collections::BTreeMap;

use serde::Deserialize;

use super::params::Params;
use super::wire::{WireDecimal, WireInt, decode_numeric_keyed};
use crate::domain::{
    DeliveryStatusCode, JOIN_SEPARATOR, MessageId, MessageStatus, join_u64,
};

#[derive(Debug, Clone, Deserialize)]
struct MessageStatusJson {
    #[serde(default)]
    text: String,
    status: String,
    created_time: WireInt,
    #[serde(default)]
    reply_number: String,
    credits_cost: WireDecimal,
    #[serde(default)]
    completed_time: Option<WireInt>,
}

pub fn encode_message_status_params(ids: &[MessageId]) -> Params {
    let raw: Vec<u64> = ids.iter().map(|id| id.value()).collect();
    Params::new().with(MessageId::FIELD, join_u64(&raw, JOIN_SEPARATOR))
}

/// Decode one batch of statuses. Keys that are not decimal message ids are skipped.
pub fn decode_message_status_json_response(
    body: &[u8],
) -> Result<BTreeMap<MessageId, MessageStatus>, serde_json::Error> {
    let parsed = serde_json::from_slice(body)?;
    let entries: Vec<(u64, MessageStatusJson)> = decode_numeric_keyed(parsed, "message status")?;

    Ok(entries
        .into_iter()
        .map(|(id, value)| {
            (
                MessageId::new(id),
                MessageStatus {
                    text: value.text,
                    status: DeliveryStatusCode::new(value.status),
                    created_time: value.created_time.0,
                    reply_number: value.reply_number,
                    credits_cost: value.credits_cost.0,
                    completed_time: value.completed_time.map(|t| t.0),
                },
            )
        })
        .collect())
}
