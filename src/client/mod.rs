//! Client layer: authenticates calls, checks the error envelope and merges batched results.

mod error;

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    Command, DEFAULT_BATCH_SIZE, ErrorCode, Inbox, MessageId, MessageStatus, Msisdn, NumberInfo,
    Password, SendResponse, SendSms, Username, ValidationError, split,
};
use crate::transport::{self, ErrorEnvelope, Params};

pub use error::{BatchError, BuildError, TextMagicError};

const DEFAULT_ENDPOINT: &str = "https://www.textmagic.com/app/api";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url.as_str()).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// TextMagic account credentials, sent with every call.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate and pair a username with its API password.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn apply(&self, params: &mut Params) {
        params.set(Username::FIELD, self.username.as_str());
        params.set(Password::FIELD, self.password.as_str());
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextMagicClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or batch size.
pub struct TextMagicClientBuilder {
    credentials: Credentials,
    endpoint: String,
    batch_size: NonZeroUsize,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextMagicClientBuilder {
    /// Create a builder with the default endpoint and batch size.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override how many ids or recipients go into one call (default 100).
    pub fn batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set an HTTP client timeout applied to each call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextMagicClient`].
    pub fn build(self) -> Result<TextMagicClient, BuildError> {
        Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(BuildError::Http)?;

        Ok(TextMagicClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            batch_size: self.batch_size,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level TextMagic client.
///
/// Every command is a GET to the API endpoint with the credentials and the
/// command name in the query string. Commands taking a list of ids or
/// recipients are split into batches that are sent one after another; a
/// failing batch stops the command and the results merged so far are returned
/// inside [`BatchError`].
///
/// The client holds no mutable state and can be shared between tasks.
pub struct TextMagicClient {
    credentials: Credentials,
    endpoint: String,
    batch_size: NonZeroUsize,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for TextMagicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMagicClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl TextMagicClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`TextMagicClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            batch_size: DEFAULT_BATCH_SIZE,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TextMagicClientBuilder {
        TextMagicClientBuilder::new(credentials)
    }

    /// Current account balance in credits.
    pub async fn account_balance(&self) -> Result<f64, TextMagicError> {
        self.invoke(
            Command::AccountBalance,
            transport::encode_account_params(),
            transport::decode_account_json_response,
        )
        .await
    }

    /// Look up the delivery status of sent messages.
    ///
    /// Ids missing from the response, or returned in a non-numeric form, are
    /// absent from the result.
    pub async fn message_status(
        &self,
        ids: &[MessageId],
    ) -> Result<BTreeMap<MessageId, MessageStatus>, BatchError<BTreeMap<MessageId, MessageStatus>>>
    {
        self.invoke_batched(
            Command::MessageStatus,
            ids,
            transport::encode_message_status_params,
            transport::decode_message_status_json_response,
            BTreeMap::new(),
            |merged, _, part| merged.extend(part),
        )
        .await
    }

    /// Check whether numbers are reachable, and at what price.
    pub async fn check_number(
        &self,
        numbers: &[Msisdn],
    ) -> Result<BTreeMap<Msisdn, NumberInfo>, BatchError<BTreeMap<Msisdn, NumberInfo>>> {
        self.invoke_batched(
            Command::CheckNumber,
            numbers,
            transport::encode_check_number_params,
            transport::decode_check_number_json_response,
            BTreeMap::new(),
            |merged, _, part| merged.extend(part),
        )
        .await
    }

    /// Delete received replies. Returns the ids TextMagic reports as deleted, in batch order.
    pub async fn delete_reply(
        &self,
        ids: &[MessageId],
    ) -> Result<Vec<MessageId>, BatchError<Vec<MessageId>>> {
        self.invoke_batched(
            Command::DeleteReply,
            ids,
            transport::encode_delete_reply_params,
            transport::decode_delete_reply_json_response,
            Vec::with_capacity(ids.len()),
            |merged, _, part| merged.extend(part),
        )
        .await
    }

    /// Fetch replies newer than `last_retrieved_id` (at most the 100 most recent).
    pub async fn receive(&self, last_retrieved_id: MessageId) -> Result<Inbox, TextMagicError> {
        self.invoke(
            Command::Receive,
            transport::encode_receive_params(last_retrieved_id),
            transport::decode_receive_json_response,
        )
        .await
    }

    /// Send a message to every recipient of `request`.
    ///
    /// `sent_text` and `parts_count` come from the first batch. A request without
    /// recipients makes no call and returns an empty response.
    pub async fn send(
        &self,
        request: &SendSms,
    ) -> Result<SendResponse, BatchError<SendResponse>> {
        let shared = transport::encode_send_params(request);
        self.invoke_batched(
            Command::Send,
            request.recipients(),
            |recipients| transport::encode_send_batch(&shared, recipients),
            transport::decode_send_json_response,
            SendResponse::default(),
            |merged, index, part| {
                if index == 0 {
                    merged.sent_text = part.sent_text;
                    merged.parts_count = part.parts_count;
                }
                merged.message_ids.extend(part.message_ids);
            },
        )
        .await
    }

    async fn invoke_batched<I, T, A>(
        &self,
        command: Command,
        items: &[I],
        encode: impl Fn(&[I]) -> Params,
        decode: impl Fn(&[u8]) -> Result<T, serde_json::Error>,
        mut merged: A,
        mut merge: impl FnMut(&mut A, usize, T),
    ) -> Result<A, BatchError<A>> {
        let batches = split(items, self.batch_size);
        let total = batches.len();

        for (index, batch) in batches.into_iter().enumerate() {
            tracing::debug!(
                %command,
                batch = index + 1,
                of = total,
                size = batch.len(),
                "sending batch"
            );
            match self.invoke(command, encode(batch), &decode).await {
                Ok(part) => merge(&mut merged, index, part),
                Err(error) => {
                    return Err(BatchError {
                        partial: merged,
                        error,
                    });
                }
            }
        }

        Ok(merged)
    }

    async fn invoke<T>(
        &self,
        command: Command,
        mut params: Params,
        decode: impl FnOnce(&[u8]) -> Result<T, serde_json::Error>,
    ) -> Result<T, TextMagicError> {
        self.credentials.apply(&mut params);
        params.set(Command::FIELD, command.as_str());

        let url = Url::parse_with_params(&self.endpoint, params.iter()).map_err(|err| {
            TextMagicError::Transport {
                command,
                source: Box::new(err),
            }
        })?;

        tracing::debug!(%command, "calling TextMagic API");
        let response = self
            .http
            .get(&url)
            .await
            .map_err(|source| TextMagicError::Transport { command, source })?;

        if !(200..=299).contains(&response.status) {
            tracing::debug!(%command, status = response.status, "unexpected HTTP status");
            return Err(TextMagicError::HttpStatus {
                command,
                status: response.status,
                reason: reason_phrase(response.status),
            });
        }

        let envelope: ErrorEnvelope = transport::decode_error_envelope(&response.body)
            .map_err(|source| TextMagicError::MalformedResponse { command, source })?;
        if envelope.is_error() {
            tracing::debug!(%command, code = envelope.error_code, "API returned an error");
            return Err(TextMagicError::Api {
                command,
                code: ErrorCode::new(envelope.error_code),
                message: envelope.error_message,
            });
        }

        decode(&response.body)
            .map_err(|source| TextMagicError::MalformedResponse { command, source })
    }
}

fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}
