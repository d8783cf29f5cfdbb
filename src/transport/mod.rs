//! Transport layer: query parameters and wire-format decoding for each command.

mod account;
mod check_number;
mod delete_reply;
mod envelope;
mod message_status;
mod params;
mod receive;
mod send_sms;
mod wire;

pub use account::{decode_account_json_response, encode_account_params};
pub use check_number::{decode_check_number_json_response, encode_check_number_params};
pub use delete_reply::{decode_delete_reply_json_response, encode_delete_reply_params};
pub use envelope::{ErrorEnvelope, decode_error_envelope};
pub use message_status::{decode_message_status_json_response, encode_message_status_params};
pub use params::Params;
pub use receive::{decode_receive_json_response, encode_receive_params};
pub use send_sms::{decode_send_json_response, encode_send_batch, encode_send_params};
