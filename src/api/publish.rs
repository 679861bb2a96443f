//! Container creation, publishing, reposting, and deletion.
//!
//! Publishing is a two-step workflow: a `create_*` call stages a container and returns its
//! id, then [`ThreadsClient::publish`] turns the container into a visible post. Media
//! containers need server-side processing first, so `publish` can wait a fixed number of
//! seconds before posting.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	api::{MediaType, ReplyControl, ThreadsClient},
	http::ThreadsHttpClient,
	obs::{self, Operation},
};

/// Optional container fields merged into the create body last.
///
/// Later values override earlier ones, including the fields a `create_*` method sets itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateOptions(JsonMap<String, Value>);
impl CreateOptions {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts who can reply.
	pub fn reply_control(self, control: ReplyControl) -> Self {
		self.insert("reply_control", control.as_str())
	}

	/// Publishes the container as a reply to `id`.
	pub fn reply_to_id(self, id: impl Into<String>) -> Self {
		self.insert("reply_to_id", id.into())
	}

	/// Quotes the post `id`.
	pub fn quote_post_id(self, id: impl Into<String>) -> Self {
		self.insert("quote_post_id", id.into())
	}

	/// Attaches a link preview (text posts only).
	pub fn link_attachment(self, url: impl Into<String>) -> Self {
		self.insert("link_attachment", url.into())
	}

	/// Sets the accessibility text of an image or video.
	pub fn alt_text(self, text: impl Into<String>) -> Self {
		self.insert("alt_text", text.into())
	}

	/// Inserts an arbitrary field.
	pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Returns true if no option is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over the configured fields.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}
}

#[derive(Deserialize)]
struct Container {
	id: String,
}

impl<C> ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Stages a text container and returns its id.
	pub async fn create_text(&self, text: &str, options: Option<&CreateOptions>) -> Result<String> {
		let mut body = JsonMap::new();

		body.insert("text".into(), text.into());

		self.create_container(MediaType::Text, body, options).await
	}

	/// Stages an image container and returns its id.
	pub async fn create_image(
		&self,
		url: &str,
		text: Option<&str>,
		is_carousel_item: bool,
		options: Option<&CreateOptions>,
	) -> Result<String> {
		let body = media_body("image_url", url, text, is_carousel_item);

		self.create_container(MediaType::Image, body, options).await
	}

	/// Stages a video container and returns its id.
	pub async fn create_video(
		&self,
		url: &str,
		text: Option<&str>,
		is_carousel_item: bool,
		options: Option<&CreateOptions>,
	) -> Result<String> {
		let body = media_body("video_url", url, text, is_carousel_item);

		self.create_container(MediaType::Video, body, options).await
	}

	/// Stages a carousel from previously created item containers and returns its id.
	pub async fn create_carousel<I, S>(
		&self,
		children: I,
		text: Option<&str>,
		options: Option<&CreateOptions>,
	) -> Result<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let children = children.into_iter().map(|c| c.as_ref().to_owned()).collect::<Vec<_>>();
		let mut body = JsonMap::new();

		body.insert("children".into(), children.join(",").into());

		if let Some(text) = text {
			body.insert("text".into(), text.into());
		}

		self.create_container(MediaType::Carousel, body, options).await
	}

	/// Publishes a container, first waiting `sleep_secs` seconds when non-zero.
	///
	/// The wait is a plain delay, not a status poll; wrap the call to cancel it.
	pub async fn publish(&self, id: &str, sleep_secs: u64) -> Result<Value> {
		if sleep_secs > 0 {
			let delay = StdDuration::from_secs(sleep_secs);

			obs::record_publish_delay(id, delay);
			self.sleeper.sleep(delay).await;
		}

		let mut body = JsonMap::new();

		body.insert("creation_id".into(), id.into());

		let request = self.request(Method::POST, "me/threads_publish")?.json(body);

		self.call(Operation::Publish, request).await?.json()
	}

	/// Reposts an existing post.
	pub async fn repost(&self, id: &str) -> Result<Value> {
		let request = self.request(Method::POST, &format!("{id}/repost"))?;

		self.call(Operation::Repost, request).await?.json()
	}

	/// Deletes a post.
	pub async fn delete(&self, id: &str) -> Result<Value> {
		let request = self.request(Method::DELETE, id)?;

		self.call(Operation::Delete, request).await?.json()
	}

	async fn create_container(
		&self,
		media_type: MediaType,
		mut body: JsonMap<String, Value>,
		options: Option<&CreateOptions>,
	) -> Result<String> {
		body.insert("media_type".into(), media_type.as_str().into());

		if let Some(options) = options {
			for (key, value) in options.iter() {
				body.insert(key.clone(), value.clone());
			}
		}

		let request = self.request(Method::POST, "me/threads")?.json(body);
		let container: Container = self.call(Operation::CreateContainer, request).await?.decode()?;

		Ok(container.id)
	}
}

fn media_body(
	url_key: &str,
	url: &str,
	text: Option<&str>,
	is_carousel_item: bool,
) -> JsonMap<String, Value> {
	let mut body = JsonMap::new();

	body.insert(url_key.into(), url.into());

	if let Some(text) = text {
		body.insert("text".into(), text.into());
	}

	body.insert("is_carousel_item".into(), is_carousel_item.into());

	body
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn options_serialize_typed_helpers() {
		let options = CreateOptions::new()
			.reply_control(ReplyControl::MentionedOnly)
			.reply_to_id("1")
			.quote_post_id("2")
			.link_attachment("https://example.com")
			.alt_text("a cat");

		assert_eq!(
			Value::Object(options.0),
			json!({
				"reply_control": "mentioned_only",
				"reply_to_id": "1",
				"quote_post_id": "2",
				"link_attachment": "https://example.com",
				"alt_text": "a cat",
			})
		);
	}

	#[test]
	fn later_inserts_override_earlier_ones() {
		let options = CreateOptions::new().alt_text("first").insert("alt_text", "second");

		assert_eq!(options.iter().count(), 1);
		assert_eq!(options.0.get("alt_text"), Some(&json!("second")));
		assert!(CreateOptions::new().is_empty());
	}

	#[test]
	fn media_body_omits_missing_text() {
		assert_eq!(
			Value::Object(media_body("image_url", "u", None, true)),
			json!({ "image_url": "u", "is_carousel_item": true })
		);
		assert_eq!(
			Value::Object(media_body("video_url", "v", Some("cap"), false)),
			json!({ "video_url": "v", "text": "cap", "is_carousel_item": false })
		);
	}
}
