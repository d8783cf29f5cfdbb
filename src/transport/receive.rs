use serde::Deserialize;

use super::params::Params;
use super::wire::{WireId, WireInt};
use crate::domain::{Inbox, MessageId, Msisdn, ReceivedMessage, encode_u64};

pub const LAST_RETRIEVED_ID_FIELD: &str = "last_retrieved_id";

#[derive(Debug, Clone, Deserialize)]
struct ReceiveJsonResponse {
    #[serde(default)]
    messages: Vec<ReceivedMessageJson>,
    #[serde(default)]
    unread: Option<WireId>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReceivedMessageJson {
    message_id: WireId,
    from: WireId,
    timestamp: WireInt,
    #[serde(default)]
    text: String,
}

pub fn encode_receive_params(last_retrieved_id: MessageId) -> Params {
    Params::new().with(
        LAST_RETRIEVED_ID_FIELD,
        encode_u64(last_retrieved_id.value()),
    )
}

pub fn decode_receive_json_response(body: &[u8]) -> Result<Inbox, serde_json::Error> {
    let parsed: ReceiveJsonResponse = serde_json::from_slice(body)?;

    let messages = parsed
        .messages
        .into_iter()
        .filter_map(|message| {
            let (Some(id), Some(from)) = (message.message_id.0, message.from.0) else {
                tracing::warn!("skipping received message with non-numeric id or sender");
                return None;
            };
            Some(ReceivedMessage {
                message_id: MessageId::new(id),
                from: Msisdn::new(from),
                timestamp: message.timestamp.0,
                text: message.text,
            })
        })
        .collect();

    Ok(Inbox {
        unread: parsed.unread.and_then(|unread| unread.0).unwrap_or(0),
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_last_retrieved_id() {
        let params = encode_receive_params(MessageId::new(1_789_985));
        assert_eq!(params.get("last_retrieved_id"), Some("1789985"));
    }

    #[test]
    fn decode_inbox() {
        let json = br#"
        {
          "messages": [
            {"timestamp": 1243244148, "from": "447624800500", "text": "Test", "message_id": "1789985"},
            {"timestamp": "1243244150", "from": 447624800501, "text": "Again", "message_id": 1789986},
            {"timestamp": 1243244151, "from": "unknown", "text": "Skipped", "message_id": 1789987}
          ],
          "unread": 2
        }
        "#;

        let inbox = decode_receive_json_response(json).unwrap();
        assert_eq!(inbox.unread, 2);
        assert_eq!(
            inbox.messages,
            vec![
                ReceivedMessage {
                    message_id: MessageId::new(1_789_985),
                    from: Msisdn::new(447_624_800_500),
                    timestamp: 1_243_244_148,
                    text: "Test".to_owned(),
                },
                ReceivedMessage {
                    message_id: MessageId::new(1_789_986),
                    from: Msisdn::new(447_624_800_501),
                    timestamp: 1_243_244_150,
                    text: "Again".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn decode_empty_inbox() {
        let inbox = decode_receive_json_response(br#"{"messages":[],"unread":0}"#).unwrap();
        assert_eq!(inbox, Inbox::default());
    }
}
