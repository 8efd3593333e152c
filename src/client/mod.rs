//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::{
    AccountSid, ApiErrorCode, ApiKeySecret, ApiKeySid, AuthToken, CheckTarget, CheckVerification,
    Field, KnownApiErrorCode, Routing, ServiceSid, StartVerification, ValidationError,
    Verification, VerificationCheck, VerificationStatus,
};

const PRODUCT: &str = "verify";
const API_VERSION: &str = "v2";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Clone, Copy)]
struct BasicCredentials<'a> {
    username: &'a str,
    password: &'a str,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        credentials: BasicCredentials<'a>,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        credentials: BasicCredentials<'a>,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(credentials.username, Some(credentials.password))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Credentials for Verify API calls, sent as HTTP basic auth.
///
/// Use [`Auth::account`] with the account SID and auth token, or [`Auth::api_key`] with an
/// API key pair.
pub enum Auth {
    /// Account SID + auth token.
    Account {
        account_sid: AccountSid,
        auth_token: AuthToken,
    },
    /// API key SID + secret.
    ApiKey { key_sid: ApiKeySid, secret: ApiKeySecret },
}

impl Auth {
    /// Create [`Auth::Account`] and validate that both parts are non-empty.
    pub fn account(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Account {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
        })
    }

    /// Create [`Auth::ApiKey`] and validate that both parts are non-empty.
    pub fn api_key(
        key_sid: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::ApiKey {
            key_sid: ApiKeySid::new(key_sid)?,
            secret: ApiKeySecret::new(secret)?,
        })
    }

    fn credentials(&self) -> BasicCredentials<'_> {
        match self {
            Self::Account {
                account_sid,
                auth_token,
            } => BasicCredentials {
                username: account_sid.as_str(),
                password: auth_token.expose(),
            },
            Self::ApiKey { key_sid, secret } => BasicCredentials {
                username: key_sid.as_str(),
                password: secret.expose(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VerifyClient`].
///
/// None of these are retried by the client.
pub enum VerifyError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a recognizable API error body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The API rejected the request with an error body.
    #[error("API error (HTTP {status}): code {code:?}, message {message:?}")]
    Api {
        status: u16,
        code: Option<ApiErrorCode>,
        message: Option<String>,
        more_info: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL cannot address the API.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl VerifyError {
    /// `true` when the API reports the resource as missing.
    ///
    /// A check against a verification older than its 10-minute window ends up here.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status, code, .. } => {
                *status == 404
                    || code.and_then(ApiErrorCode::known_kind)
                        == Some(KnownApiErrorCode::ResourceNotFound)
            }
            Self::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// `true` when the credentials were rejected.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Api { status, code, .. } => {
                *status == 401
                    || code.and_then(ApiErrorCode::known_kind)
                        == Some(KnownApiErrorCode::AuthenticationFailed)
            }
            Self::HttpStatus { status, .. } => *status == 401,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`VerifyClient`].
///
/// Use this when you need regional routing, a custom base URL, a timeout, or a user-agent.
pub struct VerifyClientBuilder {
    auth: Auth,
    routing: Routing,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VerifyClientBuilder {
    /// Create a builder with default routing and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            routing: Routing::default(),
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Route requests through an edge location and/or processing region.
    pub fn routing(mut self, routing: Routing) -> Self {
        self.routing = routing;
        self
    }

    /// Override the API base URL (e.g. `http://127.0.0.1:8080/v2/`).
    ///
    /// When set, routing is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
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

    /// Build a [`VerifyClient`].
    pub fn build(self) -> Result<VerifyClient, VerifyError> {
        let base_url = match self.base_url {
            Some(base_url) => parse_base_url(&base_url)?,
            None => {
                if self.routing.is_default() {
                    debug!("using the global endpoint");
                }
                if let Some(edge) = self.routing.edge() {
                    info!(edge = edge.as_str(), "setting edge");
                }
                if let Some(region) = self.routing.region() {
                    info!(region = region.as_str(), "setting region");
                }
                routed_base_url(&self.routing)?
            }
        };

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VerifyError::Transport(Box::new(err)))?;

        Ok(VerifyClient {
            auth: self.auth,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Verify v2 client.
///
/// This type orchestrates form encoding, the authenticated call, and response parsing.
/// Each operation issues exactly one request. By default it talks to
/// `https://verify.twilio.com/v2/`.
pub struct VerifyClient {
    auth: Auth,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for VerifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl VerifyClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`VerifyClient::builder`].
    pub fn new(auth: Auth) -> Result<Self, VerifyError> {
        Ok(Self {
            auth,
            base_url: routed_base_url(&Routing::default())?,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        })
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> VerifyClientBuilder {
        VerifyClientBuilder::new(auth)
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Start a verification (`POST Services/{ServiceSid}/Verifications`).
    ///
    /// This is not idempotent: each call may create a new attempt and invalidate the
    /// previous one.
    ///
    /// Errors:
    /// - [`VerifyError::Transport`] when the request could not be sent,
    /// - [`VerifyError::Api`] / [`VerifyError::HttpStatus`] for non-2xx responses,
    /// - [`VerifyError::Parse`] when the body is not a JSON object.
    pub async fn start_verification(
        &self,
        service: &ServiceSid,
        request: StartVerification,
    ) -> Result<Verification, VerifyError> {
        let url = self.endpoint(service, "Verifications")?;
        debug!(
            endpoint = %url,
            to = %request.to().masked(),
            channel = %request.channel(),
            "starting verification"
        );

        let params = crate::transport::encode_start_verification_form(&request);
        let body = self.post(&url, params).await?;

        let parsed = crate::transport::decode_verification_json_response(&body)
            .map_err(|err| VerifyError::Parse(Box::new(err)))?;

        warn_malformed_scalars(&parsed.status, &parsed.valid);
        if let Field::Malformed { found } = &parsed.sna {
            warn!(%found, "sna payload is not an object");
        }

        Ok(parsed)
    }

    /// Check a verification (`POST Services/{ServiceSid}/VerificationCheck`).
    ///
    /// A non-approved status is a normal result, not an error. Checking a verification
    /// that has expired fails with an error for which [`VerifyError::is_not_found`] holds.
    pub async fn check_verification(
        &self,
        service: &ServiceSid,
        request: CheckVerification,
    ) -> Result<VerificationCheck, VerifyError> {
        let url = self.endpoint(service, "VerificationCheck")?;
        match request.target() {
            CheckTarget::PhoneNumber(to) => {
                debug!(endpoint = %url, to = %to.masked(), "checking verification");
            }
            CheckTarget::VerificationSid(sid) => {
                debug!(endpoint = %url, sid = sid.as_str(), "checking verification");
            }
        }

        let params = crate::transport::encode_check_verification_form(&request);
        let body = self.post(&url, params).await?;

        let parsed = crate::transport::decode_verification_check_json_response(&body)
            .map_err(|err| VerifyError::Parse(Box::new(err)))?;

        warn_malformed_scalars(&parsed.status, &parsed.valid);
        if let Field::Malformed { found } = &parsed.sna_attempts_error_codes {
            warn!(%found, "sna_attempts_error_codes is not a list");
        }

        Ok(parsed)
    }

    fn endpoint(&self, service: &ServiceSid, resource: &str) -> Result<Url, VerifyError> {
        Ok(self
            .base_url
            .join(&format!("Services/{}/{}", service.as_str(), resource))?)
    }

    async fn post(&self, url: &Url, params: Vec<(String, String)>) -> Result<String, VerifyError> {
        let response = self
            .http
            .post_form(url.as_str(), self.auth.credentials(), params)
            .await
            .map_err(VerifyError::Transport)?;

        if !(200..=299).contains(&response.status) {
            if let Some(api) = crate::transport::decode_api_error_body(&response.body) {
                return Err(VerifyError::Api {
                    status: response.status,
                    code: api.code,
                    message: api.message,
                    more_info: api.more_info,
                });
            }
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(VerifyError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn warn_malformed_scalars(status: &Field<VerificationStatus>, valid: &Field<bool>) {
    if let Field::Malformed { found } = status {
        warn!(%found, "status is not a string");
    }
    if let Field::Malformed { found } = valid {
        warn!(%found, "valid is not a boolean");
    }
}

fn routed_base_url(routing: &Routing) -> Result<Url, VerifyError> {
    Ok(Url::parse(&format!(
        "https://{}/{}/",
        routing.host(PRODUCT),
        API_VERSION
    ))?)
}

fn parse_base_url(base_url: &str) -> Result<Url, VerifyError> {
    // `Url::join` replaces the last segment unless the base ends with a slash.
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{base_url}/"))?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{JsonKind, PhoneNumber, SnaAttemptErrors, SnaPayload, VerificationSid};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_credentials: Option<(String, String)>,
        last_params: Vec<(String, String)>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_credentials: None,
                    last_params: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_params.clone())
        }

        fn last_credentials(&self) -> Option<(String, String)> {
            self.state.lock().unwrap().last_credentials.clone()
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            credentials: BasicCredentials<'a>,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_credentials = Some((
                        credentials.username.to_owned(),
                        credentials.password.to_owned(),
                    ));
                    state.last_params = params;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn make_client(auth: Auth, transport: FakeTransport) -> VerifyClient {
        VerifyClient {
            auth,
            base_url: Url::parse("https://example.invalid/v2/").unwrap(),
            http: Arc::new(transport),
        }
    }

    fn service() -> ServiceSid {
        ServiceSid::new("VA123").unwrap()
    }

    fn phone() -> PhoneNumber {
        PhoneNumber::parse("+14155550100").unwrap()
    }

    #[tokio::test]
    async fn start_verification_posts_sna_form_with_basic_auth() {
        let json = r#"
        {
          "sid": "VE1",
          "status": "pending",
          "channel": "sna",
          "sna": {"url": "https://example/confirm/xyz"}
        }
        "#;
        let transport = FakeTransport::new(201, json);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport.clone());

        let verification = client
            .start_verification(&service(), StartVerification::sna(phone()))
            .await
            .unwrap();
        assert_eq!(verification.status, Field::Present(VerificationStatus::Pending));
        assert_eq!(
            verification.sna,
            Field::Present(SnaPayload {
                url: Some("https://example/confirm/xyz".to_owned())
            })
        );

        let (url, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v2/Services/VA123/Verifications")
        );
        assert_param(&params, "To", "+14155550100");
        assert_param(&params, "Channel", "sna");
        assert_eq!(
            transport.last_credentials(),
            Some(("AC1".to_owned(), "token".to_owned()))
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn start_verification_tolerates_missing_sna() {
        let transport = FakeTransport::new(201, r#"{"status":"pending","sna":null}"#);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let verification = client
            .start_verification(&service(), StartVerification::sna(phone()))
            .await
            .unwrap();
        assert_eq!(verification.sna, Field::Absent);
    }

    #[tokio::test]
    async fn api_key_auth_is_sent_as_basic_credentials() {
        let transport = FakeTransport::new(201, r#"{"status":"pending"}"#);
        let client = make_client(Auth::api_key("SK1", "secret").unwrap(), transport.clone());

        client
            .start_verification(&service(), StartVerification::sna(phone()))
            .await
            .unwrap();
        assert_eq!(
            transport.last_credentials(),
            Some(("SK1".to_owned(), "secret".to_owned()))
        );
    }

    #[tokio::test]
    async fn check_verification_posts_to_without_channel() {
        let json = r#"{"status":"approved","valid":true,"sna_attempts_error_codes":[]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport.clone());

        let check = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap();
        assert_eq!(check.status, Field::Present(VerificationStatus::Approved));
        assert_eq!(check.valid, Field::Present(true));
        assert_eq!(
            check.sna_attempts_error_codes,
            Field::Present(SnaAttemptErrors::default())
        );

        let (url, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v2/Services/VA123/VerificationCheck")
        );
        assert_eq!(params, vec![("To".to_owned(), "+14155550100".to_owned())]);
    }

    #[tokio::test]
    async fn check_with_mistyped_valid_flag_still_succeeds() {
        let json = r#"{"status":"pending","valid":"false","sna_attempts_error_codes":[]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let check = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap();
        assert_eq!(check.status, Field::Present(VerificationStatus::Pending));
        assert_eq!(
            check.valid,
            Field::Malformed {
                found: JsonKind::String
            }
        );
    }

    #[tokio::test]
    async fn check_verification_by_sid() {
        let transport = FakeTransport::new(200, r#"{"status":"pending","valid":false}"#);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport.clone());

        let request = CheckVerification::for_sid(VerificationSid::new("VE1").unwrap());
        client.check_verification(&service(), request).await.unwrap();

        let (_, params) = transport.last_request();
        assert_param(&params, "VerificationSid", "VE1");
    }

    #[tokio::test]
    async fn repeated_checks_yield_identical_results() {
        let json = r#"
        {
          "status": "pending",
          "valid": false,
          "sna_attempts_error_codes": [{"attempt_sid": "AT123", "code": 60200}]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport.clone());

        let first = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap();
        let second = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn expired_verification_maps_to_not_found_api_error() {
        let body = r#"
        {
          "code": 20404,
          "message": "The requested resource was not found",
          "more_info": "https://www.twilio.com/docs/errors/20404",
          "status": 404
        }
        "#;
        let transport = FakeTransport::new(404, body);
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let err = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap_err();
        match &err {
            VerifyError::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(*status, 404);
                assert_eq!(*code, Some(ApiErrorCode::new(20404)));
                assert_eq!(
                    message.as_deref(),
                    Some("The requested resource was not found")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
    }

    #[tokio::test]
    async fn rejected_credentials_map_to_auth_error() {
        let body = r#"{"code": 20003, "message": "Authenticate", "status": 401}"#;
        let transport = FakeTransport::new(401, body);
        let client = make_client(Auth::account("AC1", "wrong").unwrap(), transport);

        let err = client
            .start_verification(&service(), StartVerification::sna(phone()))
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn non_api_error_body_maps_to_http_status() {
        let transport = FakeTransport::new(502, "<html>bad gateway</html>");
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let err = client
            .start_verification(&service(), StartVerification::sna(phone()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VerifyError::HttpStatus {
                status: 502,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn empty_http_body_maps_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let err = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VerifyError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(Auth::account("AC1", "token").unwrap(), transport);

        let err = client
            .check_verification(&service(), CheckVerification::for_phone(phone()))
            .await
            .unwrap_err();
        assert!(matches!(err, VerifyError::Parse(_)));
    }

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::account("   ", "token").is_err());
        assert!(Auth::account("AC1", "").is_err());
        assert!(Auth::api_key("SK1", "").is_err());
    }

    #[test]
    fn builder_applies_routing_to_base_url() {
        let client = VerifyClient::builder(Auth::account("AC1", "token").unwrap())
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://verify.twilio.com/v2/");

        let client = VerifyClient::builder(Auth::account("AC1", "token").unwrap())
            .routing(Routing::ireland())
            .build()
            .unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://verify.dublin.ie1.twilio.com/v2/"
        );

        let client = VerifyClient::builder(Auth::account("AC1", "token").unwrap())
            .routing(Routing::australia())
            .build()
            .unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://verify.sydney.us1.twilio.com/v2/"
        );
    }

    #[test]
    fn builder_base_url_override_wins_over_routing() {
        let client = VerifyClient::builder(Auth::account("AC1", "token").unwrap())
            .routing(Routing::australia())
            .base_url("http://127.0.0.1:8080/v2")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/v2/");
        assert_eq!(
            client
                .endpoint(&service(), "Verifications")
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/v2/Services/VA123/Verifications"
        );
    }

    #[test]
    fn builder_rejects_unparseable_base_url() {
        let err = VerifyClient::builder(Auth::account("AC1", "token").unwrap())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, VerifyError::InvalidUrl(_)));
    }
}
