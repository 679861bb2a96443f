//! Client-level error types shared by the API client, the OAuth provider, and the
//! notification channel.

// crates.io
use oauth2::HttpClientError;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const BODY_PREVIEW_LEN: usize = 256;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; nothing was sent.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS); no response was received.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The Graph API answered with a status outside the 2xx range.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// A successful response carried a body of an unexpected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The `state` returned to the OAuth callback differs from the one that was issued.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}
impl Error {
	/// HTTP status attached to the failure, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(e) => Some(e.status),
			Self::Decode(e) => Some(e.status),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures.
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
	/// The composed request URL cannot be parsed.
	#[error("Request URL is invalid: {url}.")]
	InvalidUrl {
		/// URL string that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The request body could not be serialized.
	#[error("Request body could not be encoded.")]
	BodyEncode(#[source] serde_json::Error),
	/// No access token could be resolved for the call.
	#[error("No Threads access token is available.")]
	MissingToken,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Threads API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Threads API.")]
	Io(#[from] std::io::Error),
	/// Transport failed without a typed error.
	#[error("HTTP client error occurred while calling the Threads API: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-2xx response returned by the Graph API.
///
/// The client does not classify failures further (rate limit, auth, validation); callers
/// inspect [`status`](Self::status) and [`platform`](Self::platform) themselves.
#[derive(Debug, ThisError)]
#[error("Threads API returned HTTP {status}: {message}.")]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Platform error message, or a preview of the body when none was supplied.
	pub message: String,
	/// Structured Graph error payload, when the body carried one.
	pub platform: Option<PlatformError>,
	/// Raw response body (lossy UTF-8).
	pub body: String,
	/// Retry-After hint from upstream, if supplied. Never acted on by the client.
	pub retry_after: Option<Duration>,
}
impl ApiError {
	/// Builds an error from a raw status, body, and optional retry hint.
	pub fn new(status: u16, body: &[u8], retry_after: Option<Duration>) -> Self {
		let platform = serde_json::from_slice::<ErrorEnvelope>(body).ok().map(|e| e.error);
		let body = String::from_utf8_lossy(body).into_owned();
		let message = match &platform {
			Some(platform) if !platform.message.is_empty() => platform.message.clone(),
			_ if body.trim().is_empty() => "empty response body".into(),
			_ => body.chars().take(BODY_PREVIEW_LEN).collect(),
		};

		Self { status, message, platform, body, retry_after }
	}
}

/// Graph API error payload (`{"error": {...}}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformError {
	/// Human-readable message.
	#[serde(default)]
	pub message: String,
	/// Error family such as `OAuthException`.
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
	/// Numeric error code.
	#[serde(default)]
	pub code: Option<i64>,
	/// Numeric error subcode.
	#[serde(default)]
	pub error_subcode: Option<i64>,
	/// Trace identifier for support requests.
	#[serde(default)]
	pub fbtrace_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
	error: PlatformError,
}

/// Successful response whose body could not be decoded into the expected shape.
#[derive(Debug, ThisError)]
#[error("Threads API returned a body that could not be decoded (HTTP {status}).")]
pub struct DecodeError {
	/// Structured parsing failure including the JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response.
	pub status: u16,
}

/// Converts an [`HttpClientError`] emitted by a transport into a crate error.
pub(crate) fn map_client_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized transport failure".into() }.into(),
	}
}
