use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde::Deserialize;

use super::check_number::encode_phone_list;
use super::params::Params;
use super::wire::{WireId, decode_numeric_keyed};
use crate::domain::{
    MAX_PARTS, MessageId, MessageText, Msisdn, SendOption, SendResponse, SendSms, SenderId,
    encode_u64,
};

const UNICODE_FIELD: &str = "unicode";
const MAX_LENGTH_FIELD: &str = "max_length";
const CUT_EXTRA_FIELD: &str = "cut_extra";
const SEND_TIME_FIELD: &str = "send_time";

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    message_id: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    sent_text: String,
    #[serde(default)]
    parts_count: u32,
}

/// Parameters shared by every batch of a send: text, encoding flag and options.
pub fn encode_send_params(request: &SendSms) -> Params {
    let mut params = Params::new()
        .with(MessageText::FIELD, request.text().as_str())
        .with(
            UNICODE_FIELD,
            if request.text().requires_unicode() { "1" } else { "0" },
        );
    for option in request.options() {
        apply_option(&mut params, option);
    }
    params
}

/// Parameters for one batch of recipients on top of the shared ones.
pub fn encode_send_batch(shared: &Params, recipients: &[Msisdn]) -> Params {
    shared
        .clone()
        .with(Msisdn::FIELD, encode_phone_list(recipients))
}

fn apply_option(params: &mut Params, option: &SendOption) {
    match option {
        SendOption::From(sender) => params.set(SenderId::FIELD, sender.as_str()),
        SendOption::MaxLength(parts) => {
            params.set(MAX_LENGTH_FIELD, encode_u64(u64::from(clamp_parts(*parts))));
        }
        SendOption::CutExtra => params.set(CUT_EXTRA_FIELD, "1"),
        SendOption::SendTime(at) => {
            params.set(SEND_TIME_FIELD, at.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
    }
}

fn clamp_parts(parts: u8) -> u8 {
    parts.clamp(1, MAX_PARTS)
}

/// Decode one batch. Entries whose id or phone is not a decimal number are skipped.
pub fn decode_send_json_response(body: &[u8]) -> Result<SendResponse, serde_json::Error> {
    let parsed: SendJsonResponse = serde_json::from_slice(body)?;

    let entries: Vec<(u64, WireId)> = decode_numeric_keyed(parsed.message_id, "sent message")?;
    let message_ids = entries
        .into_iter()
        .filter_map(|(id, phone)| {
            let Some(phone) = phone.0 else {
                tracing::warn!(id, "skipping sent message with non-numeric phone");
                return None;
            };
            Some((Msisdn::new(phone), MessageId::new(id)))
        })
        .collect();

    Ok(SendResponse {
        message_ids,
        sent_text: parsed.sent_text,
        parts_count: parsed.parts_count,
    })
}
