//! Proxy-level error types shared across the secret, token, and upstream layers.
//!
//! Every variant collapses into a single `500 server_error` response at the handler boundary;
//! the structure exists so the logged failure says which layer broke and why.

// self
use crate::_prelude::*;

/// Proxy-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical proxy error.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credentials could not be read from the secret store.
	#[error(transparent)]
	Secret(#[from] SecretError),
	/// Refresh-token exchange failed.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Web API answered with something other than JSON.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
}

/// Configuration and construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// An endpoint URL could not be parsed.
	#[error("The {endpoint} endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Endpoint label.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Secret store failures.
#[derive(Debug, ThisError)]
pub enum SecretError {
	/// The secret does not exist.
	#[error("Secret `{secret_id}` was not found.")]
	NotFound {
		/// Secret identifier that was requested.
		secret_id: String,
	},
	/// The caller is not allowed to read the secret.
	#[error("Access to secret `{secret_id}` was denied.")]
	AccessDenied {
		/// Secret identifier that was requested.
		secret_id: String,
	},
	/// The secret exists but carries no string payload (binary secrets are unsupported).
	#[error("Secret `{secret_id}` has no string value.")]
	MissingSecretString {
		/// Secret identifier that was requested.
		secret_id: String,
	},
	/// The secret payload is not a valid credentials document.
	#[error("Secret `{secret_id}` is not a valid credentials document.")]
	Malformed {
		/// Secret identifier that was requested.
		secret_id: String,
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Backend-level failure reported by the secret store.
	#[error("Secret store failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Refresh-token exchange failures.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// Token endpoint answered with an OAuth error document.
	#[error("Token endpoint rejected the refresh: {error}.")]
	Rejected {
		/// OAuth `error` code (e.g. `invalid_grant`).
		error: String,
		/// OAuth `error_description`, when supplied.
		description: Option<String>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint returned an unexpected but well-formed response.
	#[error("Token endpoint returned an unexpected response: {message}.")]
	Endpoint {
		/// Summary of the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Token endpoint responded with JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling an upstream endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling an upstream endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Web API response failures.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// Response body is not valid JSON.
	#[error("Web API endpoint `{endpoint}` returned a non-JSON body with status {status}.")]
	MalformedBody {
		/// Path of the endpoint that was called.
		endpoint: String,
		/// HTTP status code of the response.
		status: u16,
		/// Underlying parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
