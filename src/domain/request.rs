use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::domain::value::{MessageText, Msisdn, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Remote operation exposed by the TextMagic API.
pub enum Command {
    AccountBalance,
    CheckNumber,
    DeleteReply,
    MessageStatus,
    Receive,
    Send,
}

impl Command {
    /// Query parameter name carrying the command (`cmd`).
    pub const FIELD: &'static str = "cmd";

    /// Name of the command on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccountBalance => "account",
            Self::CheckNumber => "check_number",
            Self::DeleteReply => "delete_reply",
            Self::MessageStatus => "message_status",
            Self::Receive => "receive",
            Self::Send => "send",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest `max_length` TextMagic accepts (in message parts).
pub const MAX_PARTS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Optional `send` parameter.
///
/// Options are applied in the order they were added; when the same option is
/// given more than once, the last one wins.
pub enum SendOption {
    /// Override the account's default sender (`from`).
    From(SenderId),
    /// Maximum number of parts a long message may be split into (`max_length`),
    /// clamped to `1..=3`.
    MaxLength(u8),
    /// Cut text that does not fit into `max_length` parts instead of rejecting it (`cut_extra`).
    CutExtra,
    /// Schedule the message instead of sending it immediately (`send_time`).
    SendTime(DateTime<FixedOffset>),
}

#[derive(Debug, Clone)]
pub struct SendSms {
    text: MessageText,
    recipients: Vec<Msisdn>,
    options: Vec<SendOption>,
}

impl SendSms {
    pub fn new(text: MessageText, recipients: Vec<Msisdn>) -> Self {
        Self {
            text,
            recipients,
            options: Vec::new(),
        }
    }

    pub fn to_one(text: MessageText, recipient: Msisdn) -> Self {
        Self::new(text, vec![recipient])
    }

    /// Append an option.
    pub fn option(mut self, option: SendOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn sender(self, sender: SenderId) -> Self {
        self.option(SendOption::From(sender))
    }

    pub fn max_length(self, parts: u8) -> Self {
        self.option(SendOption::MaxLength(parts))
    }

    pub fn cut_extra(self) -> Self {
        self.option(SendOption::CutExtra)
    }

    pub fn send_time(self, at: DateTime<FixedOffset>) -> Self {
        self.option(SendOption::SendTime(at))
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn recipients(&self) -> &[Msisdn] {
        &self.recipients
    }

    pub fn options(&self) -> &[SendOption] {
        &self.options
    }
}
