//! Shared fakes for integration tests.

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
	sync::Arc,
	time::Duration,
};
// crates.io
use parking_lot::Mutex;
use serde_json::Value;
// self
use threads_sdk::{
	api::{SleepFuture, Sleeper, ThreadsClient},
	http::{
		ThreadsHttpClient,
		oauth2::{
			AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
			http::{Method, StatusCode},
		},
	},
};

/// Error surfaced by [`RecordingHttpClient`] when told to fail.
#[derive(Debug)]
pub struct FakeTransportError;
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Fake transport refused the connection.")
	}
}
impl std::error::Error for FakeTransportError {}

/// Request captured by [`RecordingHttpClient`].
#[derive(Clone, Debug)]
pub struct Recorded {
	pub method: Method,
	pub uri: String,
	pub authorization: Option<String>,
	pub body: Vec<u8>,
}
impl Recorded {
	pub fn path(&self) -> String {
		self.uri.split('?').next().unwrap_or_default().to_owned()
	}

	pub fn json(&self) -> Value {
		serde_json::from_slice(&self.body).expect("Recorded body should be JSON.")
	}
}

#[derive(Default)]
struct State {
	requests: Vec<Recorded>,
	responses: VecDeque<(u16, String)>,
	fail: bool,
}

/// Transport that records every request and replays queued responses.
///
/// Unqueued calls answer `200 {}`.
#[derive(Clone, Default)]
pub struct RecordingHttpClient {
	state: Arc<Mutex<State>>,
}
impl RecordingHttpClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing() -> Self {
		let client = Self::default();

		client.state.lock().fail = true;

		client
	}

	pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
		self.state.lock().responses.push_back((status, body.into()));

		self
	}

	pub fn requests(&self) -> Vec<Recorded> {
		self.state.lock().requests.clone()
	}

	pub fn client(&self) -> ThreadsClient<RecordingHttpClient> {
		ThreadsClient::with_http_client(self.clone())
	}
}
impl ThreadsHttpClient for RecordingHttpClient {
	type Handle = RecordingHandle;
	type TransportError = FakeTransportError;

	fn handle(&self) -> Self::Handle {
		RecordingHandle { state: Arc::clone(&self.state) }
	}
}

pub struct RecordingHandle {
	state: Arc<Mutex<State>>,
}
impl<'c> AsyncHttpClient<'c> for RecordingHandle {
	type Error = HttpClientError<FakeTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let result = self.record(request);

		Box::pin(async move { result })
	}
}
impl RecordingHandle {
	fn record(
		&self,
		request: HttpRequest,
	) -> Result<HttpResponse, HttpClientError<FakeTransportError>> {
		let mut state = self.state.lock();

		state.requests.push(Recorded {
			method: request.method().clone(),
			uri: request.uri().to_string(),
			authorization: request
				.headers()
				.get("authorization")
				.and_then(|v| v.to_str().ok())
				.map(str::to_owned),
			body: request.body().clone(),
		});

		if state.fail {
			return Err(HttpClientError::Reqwest(Box::new(FakeTransportError)));
		}

		let (status, body) = state.responses.pop_front().unwrap_or((200, "{}".into()));
		let mut response = HttpResponse::new(body.into_bytes());

		*response.status_mut() =
			StatusCode::from_u16(status).expect("Queued status should be valid.");

		Ok(response)
	}
}

/// Sleeper that records requested delays and returns immediately.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
	delays: Arc<Mutex<Vec<Duration>>>,
}
impl RecordingSleeper {
	pub fn delays(&self) -> Vec<Duration> {
		self.delays.lock().clone()
	}
}
impl Sleeper for RecordingSleeper {
	fn sleep(&self, duration: Duration) -> SleepFuture<'_> {
		self.delays.lock().push(duration);

		Box::pin(async {})
	}
}
