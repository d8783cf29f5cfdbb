use std::fmt;

use phonenumber::country;

use crate::domain::codec::{decode_u64, encode_u64};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextMagic account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query parameter name used by TextMagic (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// TextMagic API password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query parameter name used by TextMagic (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name or number (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled in your TextMagic account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by TextMagic (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by TextMagic (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the text needs the `unicode=1` flag, i.e. it contains
    /// characters outside the GSM 03.38 default alphabet and its extension table.
    pub fn requires_unicode(&self) -> bool {
        !self.0.chars().all(is_gsm_char)
    }
}

const GSM_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?\
¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà";
const GSM_EXTENSION: &str = "\u{c}^{}\\[~]|€";

fn is_gsm_char(c: char) -> bool {
    GSM_BASIC.contains(c) || GSM_EXTENSION.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// TextMagic message id.
pub struct MessageId(u64);

impl MessageId {
    /// Query parameter name used by `message_status`; `delete_reply` sends `deleted` instead.
    pub const FIELD: &'static str = "ids";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse a wire-format decimal id.
    pub fn parse(value: &str) -> Option<Self> {
        decode_u64(value).map(Self)
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u64(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number in international format as TextMagic expects it: country code
/// followed by the subscriber number, digits only (`447624800500`).
pub struct Msisdn(u64);

impl Msisdn {
    /// Query parameter name used by `send` and `check_number` (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Wrap an already normalized number.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse a human-entered phone number and normalize it through E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            input: raw.to_owned(),
        };
        let parsed = phonenumber::parse(default_region, raw).map_err(|_| invalid())?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        e164.strip_prefix('+')
            .and_then(decode_u64)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl From<u64> for Msisdn {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u64(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifecycle class of a [`DeliveryStatusCode`].
pub enum DeliveryStage {
    /// The message is still travelling and its status may change.
    Intermediate,
    /// The status will not change anymore.
    Final,
    /// The code is not known to this crate.
    Unknown,
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Intermediate => "intermediate",
            Self::Final => "final",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery notification code reported by `message_status`.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct DeliveryStatusCode(String);

impl DeliveryStatusCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as provided by TextMagic.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownDeliveryCode> {
        KnownDeliveryCode::from_code(&self.0)
    }

    pub fn stage(&self) -> DeliveryStage {
        self.known_kind()
            .map_or(DeliveryStage::Unknown, KnownDeliveryCode::stage)
    }

    pub fn description(&self) -> &'static str {
        self.known_kind()
            .map_or(UNKNOWN_DESCRIPTION, KnownDeliveryCode::description)
    }
}

impl fmt::Display for DeliveryStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

const UNKNOWN_DESCRIPTION: &str = "The status is unknown.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Delivery codes documented by TextMagic.
pub enum KnownDeliveryCode {
    Queued,
    SentToOperator,
    AcknowledgedByOperator,
    BufferedByOperator,
    Scheduled,
    Delivered,
    DeliveryFailed,
    SendFailed,
    RejectedByOperator,
    Unknown,
}

impl KnownDeliveryCode {
    /// Convert a single-letter wire code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "q" => Self::Queued,
            "r" => Self::SentToOperator,
            "a" => Self::AcknowledgedByOperator,
            "b" => Self::BufferedByOperator,
            "s" => Self::Scheduled,
            "d" => Self::Delivered,
            "f" => Self::DeliveryFailed,
            "e" => Self::SendFailed,
            "j" => Self::RejectedByOperator,
            "u" => Self::Unknown,
            _ => return None,
        })
    }

    pub fn stage(self) -> DeliveryStage {
        match self {
            Self::Queued
            | Self::SentToOperator
            | Self::AcknowledgedByOperator
            | Self::BufferedByOperator
            | Self::Scheduled => DeliveryStage::Intermediate,
            Self::Delivered
            | Self::DeliveryFailed
            | Self::SendFailed
            | Self::RejectedByOperator
            | Self::Unknown => DeliveryStage::Final,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Queued => "The message is queued on the TextMagic server.",
            Self::SentToOperator => "The message has been sent to the mobile operator.",
            Self::AcknowledgedByOperator => "The mobile operator has acknowledged the message.",
            Self::BufferedByOperator => "The mobile operator has queued the message.",
            Self::Scheduled => "This message is scheduled to be sent later.",
            Self::Delivered => "The message has been successfully delivered to the handset.",
            Self::DeliveryFailed => "An error occurred while delivering message.",
            Self::SendFailed => "An error occurred while sending message.",
            Self::RejectedByOperator => "The mobile operator has rejected the message.",
            Self::Unknown => UNKNOWN_DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// TextMagic `error_code`.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i64);

impl ErrorCode {
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Map this code to a known error variant, if one exists.
    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Returns `true` if the provider rejected the credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known_kind(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known TextMagic error codes.
pub enum KnownErrorCode {
    LowBalance,
    UndefinedCommand,
    InvalidCredentials,
    InvalidPhoneFormat,
    InvalidParameterValue,
    TooManyItems,
    MessageNotFound,
    UnicodeNotFlagged,
    InvalidSendTime,
}

impl KnownErrorCode {
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            2 => Self::LowBalance,
            3 => Self::UndefinedCommand,
            5 => Self::InvalidCredentials,
            9 => Self::InvalidPhoneFormat,
            10 => Self::InvalidParameterValue,
            11 => Self::TooManyItems,
            14 => Self::MessageNotFound,
            15 => Self::UnicodeNotFlagged,
            16 => Self::InvalidSendTime,
            _ => return None,
        })
    }

    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new(" user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());
        assert_eq!(format!("{password:?}"), "Password(***)");

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");

        let text = MessageText::new(" hi ").unwrap();
        assert_eq!(text.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn message_text_detects_unicode() {
        assert!(!MessageText::new("Hello, [world] €5 @ 10:00").unwrap().requires_unicode());
        assert!(!MessageText::new("Grüße aus Åre").unwrap().requires_unicode());
        assert!(MessageText::new("Привет").unwrap().requires_unicode());
        assert!(MessageText::new("ok 👍").unwrap().requires_unicode());
    }

    #[test]
    fn ids_display_as_decimal() {
        assert_eq!(MessageId::new(8_624_389).to_string(), "8624389");
        assert_eq!(MessageId::parse("8624389"), Some(MessageId::new(8_624_389)));
        assert_eq!(MessageId::parse("86x"), None);
        assert_eq!(Msisdn::new(447_624_800_500).to_string(), "447624800500");
    }

    #[test]
    fn msisdn_parse_normalizes_through_e164() {
        let a = Msisdn::parse(None, "+44 7624 800500").unwrap();
        let b = Msisdn::parse(Some(country::Id::GB), "07624 800500").unwrap();
        assert_eq!(a, Msisdn::new(447_624_800_500));
        assert_eq!(a, b);

        assert!(matches!(
            Msisdn::parse(None, "  "),
            Err(ValidationError::Empty { field: "phone" })
        ));
        assert!(matches!(
            Msisdn::parse(None, "not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn delivery_codes_classify() {
        for code in ["q", "r", "a", "b", "s"] {
            assert_eq!(
                DeliveryStatusCode::new(code).stage(),
                DeliveryStage::Intermediate
            );
        }
        for code in ["d", "f", "e", "j", "u"] {
            assert_eq!(DeliveryStatusCode::new(code).stage(), DeliveryStage::Final);
        }

        let delivered = DeliveryStatusCode::new("d");
        assert_eq!(delivered.known_kind(), Some(KnownDeliveryCode::Delivered));
        assert_eq!(
            delivered.to_string(),
            "The message has been successfully delivered to the handset."
        );
    }

    #[test]
    fn unrecognized_delivery_code_is_unknown() {
        for code in ["x", "", "D", "qq"] {
            let code = DeliveryStatusCode::new(code);
            assert_eq!(code.known_kind(), None);
            assert_eq!(code.stage(), DeliveryStage::Unknown);
            assert_eq!(code.description(), "The status is unknown.");
        }
        assert_eq!(DeliveryStage::Unknown.to_string(), "unknown");
    }

    #[test]
    fn error_code_known_mapping() {
        assert_eq!(
            ErrorCode::new(3).known_kind(),
            Some(KnownErrorCode::UndefinedCommand)
        );
        assert!(ErrorCode::new(5).is_auth_error());
        assert!(!ErrorCode::new(3).is_auth_error());
        assert_eq!(ErrorCode::new(9999).known_kind(), None);
    }
}
