use serde::Deserialize;

use super::params::Params;
use super::wire::WireId;
use crate::domain::{JOIN_SEPARATOR, MessageId, join_u64};

/// Request parameter carrying the ids to delete. The response lists the ids under the same name.
pub const DELETED_FIELD: &str = "deleted";

#[derive(Debug, Clone, Deserialize)]
struct DeleteReplyJsonResponse {
    #[serde(default)]
    deleted: Vec<WireId>,
}

pub fn encode_delete_reply_params(ids: &[MessageId]) -> Params {
    let raw: Vec<u64> = ids.iter().map(|id| id.value()).collect();
    Params::new().with(DELETED_FIELD, join_u64(&raw, JOIN_SEPARATOR))
}

pub fn decode_delete_reply_json_response(body: &[u8]) -> Result<Vec<MessageId>, serde_json::Error> {
    let parsed: DeleteReplyJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed
        .deleted
        .into_iter()
        .filter_map(|id| {
            if id.0.is_none() {
                tracing::warn!("skipping deleted reply with non-numeric id");
            }
            id.0.map(MessageId::new)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_ids() {
        let params = encode_delete_reply_params(&[MessageId::new(1), MessageId::new(20)]);
        assert_eq!(params.get("deleted"), Some("1,20"));
    }

    #[test]
    fn decode_keeps_order() {
        let ids = decode_delete_reply_json_response(br#"{"deleted":[3, "1", 2]}"#).unwrap();
        assert_eq!(
            ids,
            vec![MessageId::new(3), MessageId::new(1), MessageId::new(2)]
        );
    }

    #[test]
    fn decode_missing_list_is_empty() {
        assert!(decode_delete_reply_json_response(b"{}").unwrap().is_empty());
    }
}
