mod common;

// std
use std::{sync::Arc, time::Duration};
// crates.io
use serde_json::json;
// self
use common::{RecordingHttpClient, RecordingSleeper};
use threads_sdk::{
	auth::{TokenSecret, TokenSource},
	error::{ConfigError, Error},
	notify::{ThreadsChannel, ThreadsMessage, ThreadsNotification},
};

struct Subscriber {
	token: Option<String>,
}
impl TokenSource for Subscriber {
	fn threads_token(&self) -> Option<TokenSecret> {
		self.token.threads_token()
	}
}

struct Release {
	version: &'static str,
}
impl ThreadsNotification<Subscriber> for Release {
	fn to_threads(&self, _: &Subscriber) -> Option<ThreadsMessage> {
		(!self.version.is_empty()).then(|| ThreadsMessage::new(format!("v{} is out", self.version)))
	}
}

fn channel(
	http: &RecordingHttpClient,
	sleeper: &RecordingSleeper,
) -> ThreadsChannel<RecordingHttpClient> {
	ThreadsChannel::new(http.client().with_sleeper(Arc::new(sleeper.clone())))
}

fn linked() -> Subscriber {
	Subscriber { token: Some("user-token".into()) }
}

#[tokio::test]
async fn video_wins_over_image_and_waits_before_publish() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();

	http.respond(200, r#"{"id":"v-1"}"#).respond(200, r#"{"id":"p-1"}"#);

	let message = ThreadsMessage::new("launch")
		.with_image("https://cdn.example.com/i.png")
		.with_video("https://cdn.example.com/v.mp4");
	let published = channel(&http, &sleeper)
		.deliver(TokenSecret::new("user-token"), &message)
		.await
		.expect("Delivery should succeed.");
	let requests = http.requests();

	assert_eq!(published["id"], "p-1");
	assert_eq!(requests.len(), 2);
	assert_eq!(
		requests[0].json(),
		json!({
			"media_type": "VIDEO",
			"video_url": "https://cdn.example.com/v.mp4",
			"text": "launch",
			"is_carousel_item": false
		})
	);
	assert_eq!(requests[1].json(), json!({"creation_id": "v-1"}));
	assert_eq!(requests[1].authorization.as_deref(), Some("Bearer user-token"));
	assert_eq!(sleeper.delays(), [Duration::from_secs(30)]);
}

#[tokio::test]
async fn image_is_used_when_no_video_is_attached() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();

	http.respond(200, r#"{"id":"i-1"}"#);

	let message = ThreadsMessage::new("photo").with_image("https://cdn.example.com/i.png");

	channel(&http, &sleeper)
		.deliver(TokenSecret::new("user-token"), &message)
		.await
		.expect("Delivery should succeed.");

	assert_eq!(http.requests()[0].json()["media_type"], "IMAGE");
	assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn blank_media_falls_back_to_text() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();

	http.respond(200, r#"{"id":"t-1"}"#);

	let message = ThreadsMessage::new("plain").with_image(" ").with_sleep(0);

	channel(&http, &sleeper)
		.deliver(TokenSecret::new("user-token"), &message)
		.await
		.expect("Delivery should succeed.");

	assert_eq!(http.requests()[0].json(), json!({"media_type": "TEXT", "text": "plain"}));
}

#[tokio::test]
async fn failed_create_skips_publish() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();

	http.respond(500, r#"{"error":{"message":"Upload failed"}}"#);

	let message = ThreadsMessage::new("clip").with_video("https://cdn.example.com/v.mp4");
	let err = channel(&http, &sleeper)
		.deliver(TokenSecret::new("user-token"), &message)
		.await
		.expect_err("Failed create should raise an error.");

	assert!(matches!(err, Error::Api(_)));
	assert_eq!(http.requests().len(), 1);
	assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn send_resolves_the_recipient_token() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();

	http.respond(200, r#"{"id":"t-1"}"#).respond(200, r#"{"id":"p-1"}"#);

	let published = channel(&http, &sleeper)
		.send(&linked(), &Release { version: "1.2.0" })
		.await
		.expect("Send should succeed.")
		.expect("A message should have been published.");
	let requests = http.requests();

	assert_eq!(published["id"], "p-1");
	assert_eq!(requests[0].json()["text"], "v1.2.0 is out");
	assert!(requests.iter().all(|r| r.authorization.as_deref() == Some("Bearer user-token")));
}

#[tokio::test]
async fn send_without_message_is_a_no_op() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();
	let outcome = channel(&http, &sleeper)
		.send(&linked(), &Release { version: "" })
		.await
		.expect("Skipped notification should not fail.");

	assert!(outcome.is_none());
	assert!(http.requests().is_empty());
}

#[tokio::test]
async fn send_without_token_fails_before_any_request() {
	let http = RecordingHttpClient::new();
	let sleeper = RecordingSleeper::default();
	let err = channel(&http, &sleeper)
		.send(&Subscriber { token: None }, &ThreadsMessage::new("hello"))
		.await
		.expect_err("Missing token should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingToken)));
	assert!(http.requests().is_empty());
}
