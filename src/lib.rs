//! Typed Rust client for the TextMagic HTTP SMS API.
//!
//! The crate is split into a domain layer of strong types (ids, phone numbers,
//! message text, delivery codes, the numeric codec and the batcher), a
//! transport layer for wire-format quirks, and a small client layer that
//! authenticates calls, checks the error envelope and merges batched results.
//!
//! ```rust,no_run
//! use textmagic::{Credentials, MessageText, Msisdn, SendSms, TextMagicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TextMagicClient::new(Credentials::new("user", "api-password")?);
//!     let phone = Msisdn::parse(None, "+44 7624 800500")?;
//!     let request = SendSms::to_one(MessageText::new("hello")?, phone);
//!     let sent = client.send(&request).await?;
//!     println!("{:?}", sent.message_ids);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BatchError, BuildError, Credentials, TextMagicClient, TextMagicClientBuilder, TextMagicError,
};
pub use domain::{
    Command, DeliveryStage, DeliveryStatusCode, ErrorCode, Inbox, KnownDeliveryCode,
    KnownErrorCode, MessageId, MessageStatus, MessageText, Msisdn, NumberInfo, ReceivedMessage,
    SendOption, SendResponse, SendSms, SenderId, ValidationError,
};
