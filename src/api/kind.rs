// self
use crate::_prelude::*;

/// Container media kinds accepted by `POST me/threads`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
	/// Text-only post.
	Text,
	/// Single image (or carousel item).
	Image,
	/// Single video (or carousel item).
	Video,
	/// Carousel of previously created item containers.
	Carousel,
}
impl MediaType {
	/// Wire value for the `media_type` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			MediaType::Text => "TEXT",
			MediaType::Image => "IMAGE",
			MediaType::Video => "VIDEO",
			MediaType::Carousel => "CAROUSEL",
		}
	}
}
impl Display for MediaType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Who may reply to a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplyControl {
	/// Anyone can reply.
	#[serde(rename = "everyone")]
	Everyone,
	/// Only profiles the author follows can reply.
	#[serde(rename = "accounts_you_follow")]
	AccountsYouFollow,
	/// Only mentioned profiles can reply.
	#[serde(rename = "mentioned_only")]
	MentionedOnly,
}
impl ReplyControl {
	/// Wire value for the `reply_control` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			ReplyControl::Everyone => "everyone",
			ReplyControl::AccountsYouFollow => "accounts_you_follow",
			ReplyControl::MentionedOnly => "mentioned_only",
		}
	}
}
impl Display for ReplyControl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Ranking used by keyword search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
	/// Most popular results first.
	#[default]
	Top,
	/// Most recent results first.
	Recent,
}
impl SearchType {
	/// Wire value for the `search_type` parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			SearchType::Top => "top",
			SearchType::Recent => "recent",
		}
	}
}
impl Display for SearchType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
