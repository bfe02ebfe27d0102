//! Refresh-token exchange against the accounts service.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, ClientId, ClientSecret, HttpClientError, RefreshToken, RequestTokenError,
	TokenResponse, TokenUrl,
	basic::{BasicClient, BasicErrorResponse, BasicRequestTokenError},
};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials},
	error::{ConfigError, TokenError, TransportError},
	http::{ReqwestHttpClient, ResponseMetadata, ResponseMetadataSlot},
};

/// Exchanges the stored refresh token for a short-lived access token.
///
/// Sends `grant_type=refresh_token` as a form-encoded POST with the client credentials in the
/// request body. Nothing is cached: each call hits the token endpoint.
#[derive(Clone, Debug)]
pub struct TokenRefresher {
	token_url: TokenUrl,
	http_client: ReqwestHttpClient,
}
impl TokenRefresher {
	/// Creates a refresher bound to `token_endpoint`.
	pub fn new(token_endpoint: &Url, http_client: ReqwestHttpClient) -> Self {
		Self { token_url: TokenUrl::from_url(token_endpoint.clone()), http_client }
	}

	/// Performs the refresh-token exchange for `credentials`.
	pub async fn refresh(&self, credentials: &Credentials) -> Result<AccessToken> {
		let meta = ResponseMetadataSlot::default();
		let instrumented = self.http_client.instrumented(meta.clone());
		let oauth_client = BasicClient::new(ClientId::new(credentials.client_id.clone()))
			.set_client_secret(ClientSecret::new(credentials.client_secret.expose().to_owned()))
			.set_auth_type(AuthType::RequestBody)
			.set_token_uri(self.token_url.clone());
		let refresh_secret = RefreshToken::new(credentials.refresh_token.expose().to_owned());
		let response = oauth_client
			.exchange_refresh_token(&refresh_secret)
			.request_async(&instrumented)
			.await
			.map_err(|err| map_request_error(meta.take(), err))?;
		let mut token = AccessToken::new(response.access_token().secret().to_owned());

		if let Some(expires_in) = response.expires_in() {
			let expires_in = i64::try_from(expires_in.as_secs()).unwrap_or(i64::MAX);

			token = token.with_expires_in(OffsetDateTime::now_utc(), Duration::seconds(expires_in));
		}

		tracing::debug!(expires_at = ?token.expires_at, "access token refreshed");

		Ok(token)
	}
}

fn map_request_error(
	meta: Option<ResponseMetadata>,
	err: BasicRequestTokenError<HttpClientError<ReqwestError>>,
) -> Error {
	let meta_ref = meta.as_ref();

	match err {
		RequestTokenError::ServerResponse(response) =>
			map_server_response_error(response, meta_ref),
		RequestTokenError::Request(error) => map_transport_error(meta_ref, error),
		RequestTokenError::Parse(source, _body) =>
			TokenError::ResponseParse { source, status: meta_status(meta_ref) }.into(),
		RequestTokenError::Other(message) => TokenError::Endpoint {
			message,
			status: meta_status(meta_ref),
			retry_after: meta_retry_after(meta_ref),
		}
		.into(),
	}
}

fn map_server_response_error(
	response: BasicErrorResponse,
	meta: Option<&ResponseMetadata>,
) -> Error {
	TokenError::Rejected {
		error: response.error().as_ref().to_owned(),
		description: response.error_description().cloned(),
		status: meta_status(meta),
	}
	.into()
}

fn map_transport_error(
	meta: Option<&ResponseMetadata>,
	err: HttpClientError<ReqwestError>,
) -> Error {
	match err {
		HttpClientError::Reqwest(inner) => map_reqwest_error(meta, *inner),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TokenError::Endpoint {
			message: format!(
				"HTTP client error occurred while calling the token endpoint: {message}"
			),
			status: meta_status(meta),
			retry_after: meta_retry_after(meta),
		}
		.into(),
		_ => TokenError::Endpoint {
			message: "HTTP client error occurred while calling the token endpoint".into(),
			status: meta_status(meta),
			retry_after: meta_retry_after(meta),
		}
		.into(),
	}
}

fn map_reqwest_error(meta: Option<&ResponseMetadata>, err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TokenError::Endpoint {
			message: "request timed out while calling the token endpoint".into(),
			status: meta_status(meta).or_else(|| err.status().map(|code| code.as_u16())),
			retry_after: meta_retry_after(meta),
		}
		.into();
	}

	TransportError::from(err).into()
}

fn meta_status(meta: Option<&ResponseMetadata>) -> Option<u16> {
	meta.and_then(|value| value.status)
}

fn meta_retry_after(meta: Option<&ResponseMetadata>) -> Option<Duration> {
	meta.and_then(|value| value.retry_after)
}
