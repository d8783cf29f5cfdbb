use std::error::Error as StdError;
use std::fmt;

use crate::domain::{Command, ErrorCode};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMagicClient`](super::TextMagicClient) calls.
///
/// Every variant carries the command that failed.
pub enum TextMagicError {
    /// The request could not be completed (DNS, TLS, timeouts, etc).
    #[error("command {command} failed while making the API call: {source}")]
    Transport {
        command: Command,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The server answered with a non-2xx HTTP status. The body is not inspected.
    #[error("command {command} returned a non-success response: {status} {reason}")]
    HttpStatus {
        command: Command,
        status: u16,
        reason: &'static str,
    },

    /// The body is not the JSON shape the command expects.
    #[error("command {command} returned malformed JSON: {source}")]
    MalformedResponse {
        command: Command,
        #[source]
        source: serde_json::Error,
    },

    /// TextMagic reported a non-zero `error_code`.
    #[error("command {command} returned API error {code}: {message}")]
    Api {
        command: Command,
        code: ErrorCode,
        message: String,
    },
}

impl TextMagicError {
    /// The command whose call failed.
    pub fn command(&self) -> Command {
        match self {
            Self::Transport { command, .. }
            | Self::HttpStatus { command, .. }
            | Self::MalformedResponse { command, .. }
            | Self::Api { command, .. } => *command,
        }
    }

    /// Whether sending the same call again later may succeed.
    ///
    /// True for transport failures and 5xx statuses. Provider rejections and
    /// malformed bodies repeat on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => (500..600).contains(status),
            Self::MalformedResponse { .. } | Self::Api { .. } => false,
        }
    }
}

/// Failure of a command that is split into several calls.
///
/// `partial` holds the merged results of every batch that completed before
/// `error` stopped the command; later batches were not attempted.
#[derive(Debug)]
pub struct BatchError<T> {
    pub partial: T,
    pub error: TextMagicError,
}

impl<T> BatchError<T> {
    /// Drop the partial results.
    pub fn into_error(self) -> TextMagicError {
        self.error
    }

    pub fn into_parts(self) -> (T, TextMagicError) {
        (self.partial, self.error)
    }
}

impl<T> fmt::Display for BatchError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> StdError for BatchError<T> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

impl<T> From<BatchError<T>> for TextMagicError {
    fn from(value: BatchError<T>) -> Self {
        value.error
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMagicClientBuilder::build`](super::TextMagicClientBuilder::build).
pub enum BuildError {
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[source] reqwest::Error),
}
