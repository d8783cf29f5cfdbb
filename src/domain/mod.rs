//! Domain layer: strong types, the numeric codec and the batcher (no I/O).

mod batch;
mod codec;
mod request;
mod response;
mod validation;
mod value;

pub use batch::{DEFAULT_BATCH_SIZE, split};
pub use codec::{JOIN_SEPARATOR, decode_u64, encode_u64, join_u64};
pub use request::{Command, MAX_PARTS, SendOption, SendSms};
pub use response::{Inbox, MessageStatus, NumberInfo, ReceivedMessage, SendResponse};
pub use validation::ValidationError;
pub use value::{
    DeliveryStage, DeliveryStatusCode, ErrorCode, KnownDeliveryCode, KnownErrorCode, MessageId,
    MessageText, Msisdn, Password, SenderId, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn send_request_keeps_recipient_order_and_options() {
        let text = MessageText::new("hi").unwrap();
        let request = SendSms::new(text, vec![Msisdn::new(3), Msisdn::new(1)])
            .cut_extra()
            .max_length(2);

        assert_eq!(request.recipients(), &[Msisdn::new(3), Msisdn::new(1)]);
        assert_eq!(
            request.options(),
            &[SendOption::CutExtra, SendOption::MaxLength(2)]
        );
    }

    #[test]
    fn send_to_one_wraps_single_recipient() {
        let request = SendSms::to_one(MessageText::new("hi").unwrap(), Msisdn::new(7));
        assert_eq!(request.recipients(), &[Msisdn::new(7)]);
        assert!(request.options().is_empty());
    }

    #[test]
    fn command_wire_names() {
        let names: Vec<&str> = [
            Command::AccountBalance,
            Command::CheckNumber,
            Command::DeleteReply,
            Command::MessageStatus,
            Command::Receive,
            Command::Send,
        ]
        .into_iter()
        .map(Command::as_str)
        .collect();
        assert_eq!(
            names,
            vec![
                "account",
                "check_number",
                "delete_reply",
                "message_status",
                "receive",
                "send"
            ]
        );
        assert_eq!(Command::Send.to_string(), "send");
    }

    #[test]
    fn delivery_code_is_pure_lookup() {
        let code = DeliveryStatusCode::new("j");
        assert_eq!(code.stage(), DeliveryStage::Final);
        assert_eq!(
            code.description(),
            "The mobile operator has rejected the message."
        );
        assert_eq!(code.as_str(), "j");
    }
}
