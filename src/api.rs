//! Graph API client facade.
//!
//! [`ThreadsClient`] owns a [`ClientConfig`] (token, base URL, API version), a shared
//! transport, and a [`Sleeper`]. Each method issues exactly one request against
//! `{base_url}{api_version}/{path}`; the token endpoints skip the version segment. Responses
//! outside the 2xx range surface as [`Error::Api`], and nothing is retried.

mod config;
mod fields;
mod kind;
mod publish;
mod read;
mod sleep;
mod token;

pub use config::*;
pub use fields::*;
pub use kind::*;
pub use publish::*;
pub use read::*;
pub use sleep::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::{TokenSecret, TokenSource},
	error::ConfigError,
	http::{self, ApiRequest, ApiResponse, ThreadsHttpClient},
	obs::{self, ApiSpan, CallOutcome, Operation},
};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestThreadsClient = ThreadsClient<ReqwestHttpClient>;

/// Typed client for the Threads Graph API.
///
/// Configuration setters consume the client and return the updated value, so a configured
/// client can be cloned cheaply and re-targeted per user without shared mutable state:
///
/// ```no_run
/// # async fn demo() -> threads_sdk::error::Result<()> {
/// use threads_sdk::api::ThreadsClient;
///
/// let client = ThreadsClient::new().with_token("long-lived-token");
/// let id = client.create_text("hello", None).await?;
///
/// client.publish(&id, 0).await?;
/// # Ok(())
/// # }
/// ```
pub struct ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	config: ClientConfig,
	http_client: Arc<C>,
	sleeper: Arc<dyn Sleeper>,
}
impl<C> ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Creates a client with default configuration on top of the provided transport.
	pub fn with_http_client(http_client: impl Into<Arc<C>>) -> Self {
		Self {
			config: ClientConfig::default(),
			http_client: http_client.into(),
			sleeper: Arc::new(TokioSleeper),
		}
	}

	/// Replaces the whole configuration.
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = config;

		self
	}

	/// Sets the bearer token.
	pub fn with_token(mut self, token: impl Into<TokenSecret>) -> Self {
		self.config.token = token.into();

		self
	}

	/// Sets the Graph base URL (defaults to `https://graph.threads.net/`).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.config.base_url = base_url.into();

		self
	}

	/// Sets the API version segment (defaults to `v1.0`).
	pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
		self.config.api_version = api_version.into();

		self
	}

	/// Replaces the sleeper used for publish delays.
	pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
		self.sleeper = sleeper;

		self
	}

	/// Returns a copy of this client carrying the token supplied by `source`.
	pub fn for_source<S>(&self, source: &S) -> Result<Self>
	where
		S: ?Sized + TokenSource,
	{
		let token = source.threads_token().ok_or(ConfigError::MissingToken)?;

		Ok(self.clone().with_token(token))
	}

	/// Current configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Shared transport.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Builds an authenticated request against a versioned Graph path.
	fn request(&self, method: oauth2::http::Method, path: &str) -> Result<ApiRequest> {
		Ok(ApiRequest::new(method, self.config.versioned_url(path)?).bearer(&self.config.token))
	}

	/// Sends `request`, records observability, and raises non-2xx responses.
	pub(crate) async fn call(&self, operation: Operation, request: ApiRequest) -> Result<ApiResponse> {
		let span = ApiSpan::new(operation);

		obs::record_call_outcome(operation, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				http::dispatch(self.http_client.as_ref(), request).await?.error_for_status()
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(operation, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(operation, CallOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl ThreadsClient<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new() -> Self {
		Self::with_http_client(ReqwestHttpClient::default())
	}
}
#[cfg(feature = "reqwest")]
impl Default for ThreadsClient<ReqwestHttpClient> {
	fn default() -> Self {
		Self::new()
	}
}
impl<C> Clone for ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			http_client: Arc::clone(&self.http_client),
			sleeper: Arc::clone(&self.sleeper),
		}
	}
}
impl<C> Debug for ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ThreadsClient").field("config", &self.config).finish()
	}
}
