//! Transport primitives for Graph API calls.
//!
//! The module exposes [`ThreadsHttpClient`], the client's only dependency on an HTTP stack,
//! together with [`ApiRequest`] (what the client wants sent) and [`ApiResponse`] (what came
//! back). Transports hand out [`AsyncHttpClient`] handles speaking plain
//! `http::Request<Vec<u8>>` / `http::Response<Vec<u8>>`, so custom stacks and test fakes plug
//! in without knowing anything about the Graph API.

pub use oauth2;

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
	http::{
		HeaderMap, Method, StatusCode,
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER},
	},
};
use serde::de::DeserializeOwned;
use serde_path_to_error::{Deserializer as PathDeserializer, Error as PathError, Track};
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{self, ApiError, ConfigError, DecodeError},
};

/// Abstraction over HTTP transports capable of executing Graph API calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared (behind
/// `Arc`) by every client, provider, and channel built from it. The handles they return must
/// own whatever state is required so their request futures remain `Send` for the lifetime of
/// the in-flight call.
pub trait ThreadsHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single call.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds a handle for the next request.
	fn handle(&self) -> Self::Handle;
}

/// Body attached to an [`ApiRequest`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
	/// No body.
	#[default]
	Empty,
	/// JSON object body.
	Json(JsonMap<String, Value>),
	/// `application/x-www-form-urlencoded` body.
	Form(Vec<(String, String)>),
}

/// Transport-agnostic description of one outbound call.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute URL including the query string.
	pub url: Url,
	/// Bearer token sent in the `Authorization` header.
	pub bearer: Option<TokenSecret>,
	/// Request body.
	pub body: RequestBody,
}
impl ApiRequest {
	/// Creates a request for the provided method and URL.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, bearer: None, body: RequestBody::Empty }
	}

	/// Creates a `GET` request.
	pub fn get(url: Url) -> Self {
		Self::new(Method::GET, url)
	}

	/// Creates a `POST` request.
	pub fn post(url: Url) -> Self {
		Self::new(Method::POST, url)
	}

	/// Creates a `DELETE` request.
	pub fn delete(url: Url) -> Self {
		Self::new(Method::DELETE, url)
	}

	/// Appends a query parameter.
	pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
		self.url.query_pairs_mut().append_pair(key, value.as_ref());

		self
	}

	/// Appends a query parameter only when a value is present.
	pub fn query_opt(self, key: &str, value: Option<impl AsRef<str>>) -> Self {
		match value {
			Some(value) => self.query(key, value),
			None => self,
		}
	}

	/// Attaches a bearer token; empty tokens are not sent.
	pub fn bearer(mut self, token: &TokenSecret) -> Self {
		self.bearer = (!token.is_empty()).then(|| token.clone());

		self
	}

	/// Sets a JSON object body.
	pub fn json(mut self, body: JsonMap<String, Value>) -> Self {
		self.body = RequestBody::Json(body);

		self
	}

	/// Sets a form-encoded body.
	pub fn form<I, K, V>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.body =
			RequestBody::Form(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect());

		self
	}

	/// Converts the request into the `http` representation consumed by transports.
	pub fn into_http(self) -> Result<HttpRequest> {
		let mut builder = oauth2::http::Request::builder()
			.method(self.method)
			.uri(self.url.as_str())
			.header(ACCEPT, "application/json");

		if let Some(token) = &self.bearer {
			builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
		}

		let body = match self.body {
			RequestBody::Empty => Vec::new(),
			RequestBody::Json(map) => {
				builder = builder.header(CONTENT_TYPE, "application/json");

				serde_json::to_vec(&map).map_err(ConfigError::BodyEncode)?
			},
			RequestBody::Form(pairs) => {
				builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");

				url::form_urlencoded::Serializer::new(String::new())
					.extend_pairs(&pairs)
					.finish()
					.into_bytes()
			},
		};

		builder.body(body).map_err(|e| ConfigError::from(e).into())
	}
}

/// Response returned by a transport, before any status interpretation.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	status: StatusCode,
	headers: HeaderMap,
	body: Vec<u8>,
}
impl ApiResponse {
	/// HTTP status code.
	pub fn status(&self) -> u16 {
		self.status.as_u16()
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Returns true for 4xx and 5xx statuses.
	pub fn failed(&self) -> bool {
		self.status.is_client_error() || self.status.is_server_error()
	}

	/// Response headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Raw response body.
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Retry-After hint expressed as a relative duration.
	pub fn retry_after(&self) -> Option<Duration> {
		parse_retry_after(&self.headers)
	}

	/// Decodes the body as an arbitrary JSON value.
	pub fn json(&self) -> Result<Value> {
		self.decode()
	}

	/// Decodes the body into `T`, reporting the failing JSON path on mismatch.
	pub fn decode<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(&self.body);
		let mut track = Track::new();
		let decoded = T::deserialize(PathDeserializer::new(&mut de, &mut track))
			.and_then(|value| de.end().map(|()| value));

		decoded.map_err(|e| {
			DecodeError { source: PathError::new(track.path(), e), status: self.status() }.into()
		})
	}

	/// Turns any non-2xx response into [`ApiError`].
	pub fn error_for_status(self) -> Result<Self> {
		if self.is_success() {
			Ok(self)
		} else {
			Err(ApiError::new(self.status(), &self.body, self.retry_after()).into())
		}
	}
}
impl From<HttpResponse> for ApiResponse {
	fn from(response: HttpResponse) -> Self {
		let (parts, body) = response.into_parts();

		Self { status: parts.status, headers: parts.headers, body }
	}
}

/// Sends `request` through `client` and returns the raw response.
pub(crate) async fn dispatch<C>(client: &C, request: ApiRequest) -> Result<ApiResponse>
where
	C: ?Sized + ThreadsHttpClient,
{
	let request = request.into_http()?;
	let handle = client.handle();
	let response = handle.call(request).await.map_err(error::map_client_error)?;

	Ok(response.into())
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ThreadsHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(self.0.clone())
	}
}

/// [`AsyncHttpClient`] handle returned by [`ReqwestHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHandle(ReqwestClient);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.execute(request.try_into().map_err(Box::new)?)
				.await
				.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::HeaderValue;
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse request URL fixture.")
	}

	#[test]
	fn query_helpers_skip_missing_values_and_encode_commas() {
		let request = ApiRequest::get(url("https://graph.threads.net/v1.0/me"))
			.query("fields", "id,username")
			.query_opt("before", None::<&str>)
			.query_opt("after", Some("cursor"));

		assert_eq!(request.url.query(), Some("fields=id%2Cusername&after=cursor"));
	}

	#[test]
	fn empty_bearer_is_not_sent() {
		let request = ApiRequest::get(url("https://graph.threads.net/v1.0/me"))
			.bearer(&TokenSecret::default())
			.into_http()
			.expect("Request should convert.");

		assert!(request.headers().get(AUTHORIZATION).is_none());

		let request = ApiRequest::get(url("https://graph.threads.net/v1.0/me"))
			.bearer(&TokenSecret::new("token"))
			.into_http()
			.expect("Request should convert.");

		assert_eq!(
			request.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
			Some("Bearer token")
		);
	}

	#[test]
	fn form_body_is_url_encoded() {
		let request = ApiRequest::post(url("https://graph.threads.net/oauth/access_token"))
			.form([("redirect_uri", "https://app.example.com/cb"), ("code", "a b")])
			.into_http()
			.expect("Request should convert.");

		assert_eq!(
			request.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
			Some("application/x-www-form-urlencoded")
		);
		assert_eq!(
			request.body().as_slice(),
			b"redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&code=a+b"
		);
	}

	#[test]
	fn error_for_status_keeps_success_and_raises_failures() {
		let mut ok = HttpResponse::new(br#"{"id":"1"}"#.to_vec());

		*ok.status_mut() = StatusCode::OK;

		let ok = ApiResponse::from(ok).error_for_status().expect("2xx should pass through.");

		assert_eq!(ok.json().expect("Body should decode.")["id"], "1");

		let mut throttled = HttpResponse::new(b"slow down".to_vec());

		*throttled.status_mut() = StatusCode::TOO_MANY_REQUESTS;
		throttled.headers_mut().insert(RETRY_AFTER, HeaderValue::from_static("7"));

		let response = ApiResponse::from(throttled);

		assert!(response.failed());

		match response.error_for_status() {
			Err(Error::Api(err)) => {
				assert_eq!(err.status, 429);
				assert_eq!(err.retry_after, Some(Duration::seconds(7)));
			},
			other => panic!("Unexpected result: {other:?}."),
		}
	}

	#[test]
	fn decode_reports_json_path() {
		#[derive(Debug, Deserialize)]
		struct Container {
			#[allow(dead_code)]
			id: String,
		}

		let mut response = HttpResponse::new(br#"{"id":42}"#.to_vec());

		*response.status_mut() = StatusCode::OK;

		let err = ApiResponse::from(response)
			.decode::<Container>()
			.expect_err("Numeric id should not decode into a string.");

		match err {
			Error::Decode(err) => {
				assert_eq!(err.status, 200);
				assert_eq!(err.source.path().to_string(), "id");
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[test]
	fn decode_rejects_trailing_data() {
		#[derive(Debug, Deserialize)]
		struct Container {
			#[allow(dead_code)]
			id: String,
		}

		let mut response = HttpResponse::new(br#"{"id":"1"} junk"#.to_vec());

		*response.status_mut() = StatusCode::OK;

		let err = ApiResponse::from(response)
			.decode::<Container>()
			.expect_err("Data after the JSON document should not decode.");

		assert!(matches!(err, Error::Decode(_)));
		assert_eq!(err.status(), Some(200));
	}
}
