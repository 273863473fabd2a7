//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{
    Credentials, SendSms, SendSmsResponse, SendersResponse, ToChannel, ToContacts, Token,
    Username, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://production.olympusmedia.co.zm/api/v1";

const AUTH_PATH: &str = "auth";
const SENDERS_PATH: &str = "senders";
const SEND_TO_CONTACTS_PATH: &str = "sms/contacts";
const SEND_TO_CHANNEL_PATH: &str = "sms/channel";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url).json(&body);
            if let Some(bearer) = bearer {
                request = request.bearer_auth(bearer);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).bearer_auth(bearer).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NotifySmsClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (`success: false` in the response envelope),
/// - validation/parse failures.
pub enum NotifyError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The Notify API reported a failure (`success: false`).
    #[error("API error: {message:?}")]
    Api { message: Option<String> },

    /// Authentication succeeded but the response carried no token.
    #[error("authentication response did not contain a token")]
    MissingToken,

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The builder was given a base URL that is not a valid URL.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

fn check_http_status(response: HttpResponse) -> Result<String, NotifyError> {
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(NotifyError::HttpStatus {
            status: response.status,
            body,
        });
    }
    Ok(response.body)
}

fn normalize_base_url(input: &str) -> Result<String, url::ParseError> {
    let url = Url::parse(input)?;
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

#[derive(Debug, Clone)]
/// Builder for [`NotifySmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct NotifySmsClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NotifySmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Notify API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the HTTP client and authenticate, returning a ready
    /// [`NotifySmsClient`].
    ///
    /// Errors:
    /// - [`NotifyError::BaseUrl`] if the configured base URL does not parse,
    /// - otherwise the error contract of [`NotifySmsClient::connect`].
    pub async fn connect(self) -> Result<NotifySmsClient, NotifyError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| NotifyError::Transport(Box::new(err)))?;

        NotifySmsClient::authenticate(
            Arc::new(ReqwestTransport { client }),
            base_url,
            self.credentials,
        )
        .await
    }
}

#[derive(Clone)]
/// High-level Notify SMS client.
///
/// Construction authenticates against the `auth` endpoint exactly once; the
/// returned bearer token is stored for the client's lifetime and attached to
/// every subsequent request. There is no refresh or re-authentication.
///
/// By default it talks to `https://production.olympusmedia.co.zm/api/v1`.
pub struct NotifySmsClient {
    credentials: Credentials,
    base_url: String,
    token: Token,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for NotifySmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifySmsClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .field("http", &"<dyn HttpTransport>")
            .finish()
    }
}

impl NotifySmsClient {
    /// Authenticate and create a client using the default base URL.
    ///
    /// For more customization, use [`NotifySmsClient::builder`].
    pub async fn connect(credentials: Credentials) -> Result<Self, NotifyError> {
        Self::builder(credentials).connect().await
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NotifySmsClientBuilder {
        NotifySmsClientBuilder::new(credentials)
    }

    async fn authenticate(
        http: Arc<dyn HttpTransport>,
        base_url: String,
        credentials: Credentials,
    ) -> Result<Self, NotifyError> {
        let url = format!("{base_url}/{AUTH_PATH}");
        let body = crate::transport::encode_authenticate_body(&credentials);

        let response = http
            .post_json(&url, None, body)
            .await
            .map_err(NotifyError::Transport)?;
        let body = check_http_status(response)?;

        let auth = crate::transport::decode_authenticate_json_response(&body)
            .map_err(|err| NotifyError::Parse(Box::new(err)))?;
        if !auth.success {
            return Err(NotifyError::Api {
                message: auth.message,
            });
        }
        let token = auth.token.ok_or(NotifyError::MissingToken)?;

        Ok(Self {
            credentials,
            base_url,
            token,
            http,
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The account username the client authenticated with.
    pub fn username(&self) -> &Username {
        self.credentials.username()
    }

    /// The bearer token obtained at construction.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Fetch the sender identities approved for this account.
    ///
    /// Errors:
    /// - [`NotifyError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NotifyError::Api`] when the Notify API reports `success: false`.
    pub async fn get_senders(&self) -> Result<SendersResponse, NotifyError> {
        let url = format!("{}/{SENDERS_PATH}", self.base_url);

        let response = self
            .http
            .get(&url, self.token.as_str())
            .await
            .map_err(NotifyError::Transport)?;
        let body = check_http_status(response)?;

        let senders = crate::transport::decode_senders_json_response(&body)
            .map_err(|err| NotifyError::Parse(Box::new(err)))?;
        if !senders.success {
            return Err(NotifyError::Api {
                message: senders.message,
            });
        }
        Ok(senders)
    }

    /// Send a message, routed to `sms/contacts` or `sms/channel` by the
    /// request variant.
    ///
    /// Errors:
    /// - [`NotifyError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NotifyError::Api`] when the Notify API reports `success: false`.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, NotifyError> {
        let path = match &request {
            SendSms::ToContacts(_) => SEND_TO_CONTACTS_PATH,
            SendSms::ToChannel(_) => SEND_TO_CHANNEL_PATH,
        };
        let url = format!("{}/{path}", self.base_url);
        let body = crate::transport::encode_send_sms_body(&request);

        let response = self
            .http
            .post_json(&url, Some(self.token.as_str()), body)
            .await
            .map_err(NotifyError::Transport)?;
        let body = check_http_status(response)?;

        let parsed = crate::transport::decode_send_sms_json_response(&body)
            .map_err(|err| NotifyError::Parse(Box::new(err)))?;
        if !parsed.success {
            return Err(NotifyError::Api {
                message: parsed.message,
            });
        }
        Ok(parsed)
    }

    /// Send a message to an explicit contact list.
    pub async fn send_to_contacts(
        &self,
        request: ToContacts,
    ) -> Result<SendSmsResponse, NotifyError> {
        self.send_sms(SendSms::ToContacts(request)).await
    }

    /// Send a message to a named broadcast channel.
    pub async fn send_to_channel(
        &self,
        request: ToChannel,
    ) -> Result<SendSmsResponse, NotifyError> {
        self.send_sms(SendSms::ToChannel(request)).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;

    use crate::domain::{ChannelId, ContactNumber, MessageText, SenderId};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordedRequest {
        method: &'static str,
        url: String,
        bearer: Option<String>,
        body: Option<Value>,
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        responses: VecDeque<(u16, String)>,
    }

    impl FakeTransport {
        fn new(responses: Vec<(u16, &str)>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses: responses
                        .into_iter()
                        .map(|(status, body)| (status, body.to_owned()))
                        .collect(),
                })),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn record(
            &self,
            request: RecordedRequest,
        ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            let (status, body) = state
                .responses
                .pop_front()
                .expect("no scripted response left");
            Ok(HttpResponse { status, body })
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            bearer: Option<&'a str>,
            body: Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                self.record(RecordedRequest {
                    method: "POST",
                    url: url.to_owned(),
                    bearer: bearer.map(str::to_owned),
                    body: Some(body),
                })
            })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            bearer: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                self.record(RecordedRequest {
                    method: "GET",
                    url: url.to_owned(),
                    bearer: Some(bearer.to_owned()),
                    body: None,
                })
            })
        }
    }

    /// Transport whose every call fails, for error-propagation tests.
    #[derive(Debug, Clone)]
    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn post_json<'a>(
            &'a self,
            _url: &'a str,
            _bearer: Option<&'a str>,
            _body: Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                Err(Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "boom"))
                    as Box<dyn StdError + Send + Sync>)
            })
        }

        fn get<'a>(
            &'a self,
            _url: &'a str,
            _bearer: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                Err(Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "boom"))
                    as Box<dyn StdError + Send + Sync>)
            })
        }
    }

    const AUTH_OK: &str = r#"
    {
      "success": true,
      "payload": {
        "token": "eyJ0eXAiOiJKV"
      }
    }
    "#;

    const SENDERS_OK: &str = r#"
    {
      "success": true,
      "payload": {
        "data": [
          {
            "_id": "5e7d5e5b4e1f5f0011e4e3c6",
            "title": "Olympus Media",
            "description": "Olympus Media",
            "status": "STATUS_ACCEPTED",
            "active": true,
            "user": "5e7d5e5b4e1f5f0011e4e3c4",
            "createdOn": "2024-03-26T14:17:55.000Z",
            "lastModifiedOn": "2024-03-26T14:17:55.000Z"
          }
        ]
      }
    }
    "#;

    const QUEUED_OK: &str = r#"
    {
      "success": true,
      "message": "message has been queued successfully",
      "payload": {}
    }
    "#;

    fn credentials() -> Credentials {
        Credentials::new("260978613411", "password").unwrap()
    }

    fn sender_id() -> SenderId {
        SenderId::new("5e7d5e5b4e1f5f0011e4e3c6").unwrap()
    }

    fn make_client(transport: impl HttpTransport + 'static) -> NotifySmsClient {
        NotifySmsClient {
            credentials: credentials(),
            base_url: "https://example.invalid/api/v1".to_owned(),
            token: Token::new("eyJ0eXAiOiJKV").unwrap(),
            http: Arc::new(transport),
        }
    }

    async fn connect_fake(transport: FakeTransport) -> Result<NotifySmsClient, NotifyError> {
        NotifySmsClient::authenticate(
            Arc::new(transport),
            "https://example.invalid/api/v1".to_owned(),
            credentials(),
        )
        .await
    }

    #[tokio::test]
    async fn connect_posts_credentials_once_and_stores_token() {
        let transport = FakeTransport::new(vec![(200, AUTH_OK)]);
        let client = connect_fake(transport.clone()).await.unwrap();

        assert_eq!(client.base_url(), "https://example.invalid/api/v1");
        assert_eq!(client.username().as_str(), "260978613411");
        assert_eq!(client.token().as_str(), "eyJ0eXAiOiJKV");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://example.invalid/api/v1/auth");
        assert_eq!(requests[0].bearer, None);
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "username": "260978613411",
                "password": "password",
            }))
        );
    }

    #[tokio::test]
    async fn connect_maps_api_failure() {
        let transport = FakeTransport::new(vec![(
            200,
            r#"{ "success": false, "message": "invalid credentials" }"#,
        )]);

        let err = connect_fake(transport).await.unwrap_err();
        match err {
            NotifyError::Api { message } => {
                assert_eq!(message.as_deref(), Some("invalid credentials"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connect_requires_token_in_payload() {
        let transport = FakeTransport::new(vec![(200, r#"{ "success": true, "payload": {} }"#)]);

        let err = connect_fake(transport).await.unwrap_err();
        assert!(matches!(err, NotifyError::MissingToken));
    }

    #[tokio::test]
    async fn connect_propagates_transport_errors() {
        let err = NotifySmsClient::authenticate(
            Arc::new(FailingTransport),
            "https://example.invalid/api/v1".to_owned(),
            credentials(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }

    #[tokio::test]
    async fn connect_maps_non_success_http_status() {
        let transport = FakeTransport::new(vec![(500, "oops")]);

        let err = connect_fake(transport).await.unwrap_err();
        assert!(matches!(
            err,
            NotifyError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn connect_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new(vec![(200, "{ not json }")]);

        let err = connect_fake(transport).await.unwrap_err();
        assert!(matches!(err, NotifyError::Parse(_)));
    }

    #[tokio::test]
    async fn get_senders_attaches_bearer_and_decodes() {
        let transport = FakeTransport::new(vec![(200, SENDERS_OK)]);
        let client = make_client(transport.clone());

        let response = client.get_senders().await.unwrap();
        assert!(response.success);
        assert_eq!(response.senders.len(), 1);
        assert_eq!(response.senders[0].id, "5e7d5e5b4e1f5f0011e4e3c6");
        assert_eq!(response.senders[0].title, "Olympus Media");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://example.invalid/api/v1/senders");
        assert_eq!(requests[0].bearer.as_deref(), Some("eyJ0eXAiOiJKV"));
    }

    #[tokio::test]
    async fn get_senders_maps_api_error() {
        let transport = FakeTransport::new(vec![(
            200,
            r#"{ "success": false, "message": "token expired" }"#,
        )]);
        let client = make_client(transport);

        let err = client.get_senders().await.unwrap_err();
        match err {
            NotifyError::Api { message } => {
                assert_eq!(message.as_deref(), Some("token expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_to_contacts_posts_body_and_decodes() {
        let transport = FakeTransport::new(vec![(200, QUEUED_OK)]);
        let client = make_client(transport.clone());

        let request = ToContacts::new(
            sender_id(),
            MessageText::new("Hello").unwrap(),
            vec![ContactNumber::new("+260978619511").unwrap()],
        )
        .unwrap();

        let response = client.send_to_contacts(request).await.unwrap();
        assert!(response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("message has been queued successfully")
        );
        assert_eq!(response.payload, serde_json::json!({}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://example.invalid/api/v1/sms/contacts"
        );
        assert_eq!(requests[0].bearer.as_deref(), Some("eyJ0eXAiOiJKV"));
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "sender_id": "5e7d5e5b4e1f5f0011e4e3c6",
                "message": "Hello",
                "contacts": ["+260978619511"],
            }))
        );
    }

    #[tokio::test]
    async fn send_to_channel_posts_channel_body() {
        let transport = FakeTransport::new(vec![(200, QUEUED_OK)]);
        let client = make_client(transport.clone());

        let request = ToChannel::new(
            sender_id(),
            MessageText::new("Hello").unwrap(),
            ChannelId::new("test_channel").unwrap(),
        );

        let response = client.send_to_channel(request).await.unwrap();
        assert!(response.success);

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://example.invalid/api/v1/sms/channel");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "sender_id": "5e7d5e5b4e1f5f0011e4e3c6",
                "message": "Hello",
                "channel": "test_channel",
            }))
        );
    }

    #[tokio::test]
    async fn send_sms_maps_api_failure() {
        let transport = FakeTransport::new(vec![(
            200,
            r#"{ "success": false, "message": "sender not approved" }"#,
        )]);
        let client = make_client(transport);

        let request = SendSms::to_channel(
            sender_id(),
            MessageText::new("Hello").unwrap(),
            ChannelId::new("test_channel").unwrap(),
        );

        let err = client.send_sms(request).await.unwrap_err();
        match err {
            NotifyError::Api { message } => {
                assert_eq!(message.as_deref(), Some("sender not approved"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_maps_empty_http_body_to_none() {
        let transport = FakeTransport::new(vec![(503, "   ")]);
        let client = make_client(transport);

        let request = SendSms::to_channel(
            sender_id(),
            MessageText::new("Hello").unwrap(),
            ChannelId::new("test_channel").unwrap(),
        );

        let err = client.send_sms(request).await.unwrap_err();
        assert!(matches!(
            err,
            NotifyError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn send_sms_propagates_transport_errors() {
        let client = make_client(FailingTransport);

        let request = SendSms::to_contacts(
            sender_id(),
            MessageText::new("Hello").unwrap(),
            vec![ContactNumber::new("+260978619511").unwrap()],
        )
        .unwrap();

        let err = client.send_sms(request).await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }

    #[tokio::test]
    async fn token_from_construction_is_reused_across_calls() {
        let transport = FakeTransport::new(vec![
            (200, AUTH_OK),
            (200, SENDERS_OK),
            (200, QUEUED_OK),
            (200, QUEUED_OK),
        ]);
        let client = connect_fake(transport.clone()).await.unwrap();

        client.get_senders().await.unwrap();
        client
            .send_to_contacts(
                ToContacts::new(
                    sender_id(),
                    MessageText::new("Hello").unwrap(),
                    vec![ContactNumber::new("+260978619511").unwrap()],
                )
                .unwrap(),
            )
            .await
            .unwrap();
        client
            .send_to_channel(ToChannel::new(
                sender_id(),
                MessageText::new("Hello").unwrap(),
                ChannelId::new("test_channel").unwrap(),
            ))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 4);
        // Exactly one authentication call, with no bearer.
        assert_eq!(requests[0].url, "https://example.invalid/api/v1/auth");
        assert_eq!(requests[0].bearer, None);
        assert_eq!(
            requests
                .iter()
                .filter(|request| request.url.ends_with("/auth"))
                .count(),
            1
        );
        // Every authorized call carries the token from construction, unchanged.
        for request in &requests[1..] {
            assert_eq!(request.bearer.as_deref(), Some("eyJ0eXAiOiJKV"));
        }
    }

    #[tokio::test]
    async fn builder_rejects_invalid_base_url_before_any_request() {
        let err = NotifySmsClient::builder(credentials())
            .base_url("not a url")
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::BaseUrl(_)));
    }

    #[test]
    fn base_url_normalization_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://example.invalid/api/v1/").unwrap(),
            "https://example.invalid/api/v1"
        );
        assert_eq!(
            normalize_base_url("https://example.invalid").unwrap(),
            "https://example.invalid"
        );
        assert!(normalize_base_url("not a url").is_err());
    }
}
