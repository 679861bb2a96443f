// self
use crate::_prelude::*;

/// Seconds a message waits before publishing once a video is attached.
pub const DEFAULT_VIDEO_SLEEP: u64 = 30;

/// Content of a single Threads post produced by a notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadsMessage {
	/// Post text; also used as the caption of media posts.
	pub text: String,
	/// Public image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	/// Public video URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub video_url: Option<String>,
	/// Seconds to wait between staging and publishing.
	#[serde(default)]
	pub sleep: u64,
}
impl ThreadsMessage {
	/// Creates a text-only message.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), ..Default::default() }
	}

	/// Attaches an image.
	pub fn with_image(mut self, url: impl Into<String>) -> Self {
		self.image_url = Some(url.into());

		self
	}

	/// Attaches a video and waits [`DEFAULT_VIDEO_SLEEP`] seconds before publishing.
	///
	/// Call [`with_sleep`](Self::with_sleep) afterwards to pick another delay.
	pub fn with_video(mut self, url: impl Into<String>) -> Self {
		self.video_url = Some(url.into());
		self.sleep = DEFAULT_VIDEO_SLEEP;

		self
	}

	/// Sets the publish delay in seconds.
	pub fn with_sleep(mut self, secs: u64) -> Self {
		self.sleep = secs;

		self
	}

	/// Media attached to the message, video first; blank URLs are ignored.
	pub fn media(&self) -> MessageMedia<'_> {
		if let Some(url) = present(&self.video_url) {
			MessageMedia::Video(url)
		} else if let Some(url) = present(&self.image_url) {
			MessageMedia::Image(url)
		} else {
			MessageMedia::Text
		}
	}
}
impl From<&str> for ThreadsMessage {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}
impl From<String> for ThreadsMessage {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

/// Container kind chosen for a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageMedia<'a> {
	/// Video container with the given URL.
	Video(&'a str),
	/// Image container with the given URL.
	Image(&'a str),
	/// Text container.
	Text,
}

fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.trim().is_empty())
}
