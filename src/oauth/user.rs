// self
use crate::{
	_prelude::*,
	auth::{TokenGrant, grant},
};

/// Threads account normalized from the raw `/me` profile payload.
///
/// Missing profile fields map to `None`; the untouched payload stays available in
/// [`raw`](Self::raw).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadsUser {
	/// Threads user id.
	pub id: Option<String>,
	/// Handle (`username`).
	pub nickname: Option<String>,
	/// Display name.
	pub name: Option<String>,
	/// Profile picture URL.
	pub avatar: Option<String>,
	/// Raw profile payload.
	pub raw: Value,
	/// Token obtained during the login, when the user came from a completed flow.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<TokenGrant>,
}
impl ThreadsUser {
	/// Projects a raw profile payload into a normalized user.
	pub fn from_profile(raw: &Value) -> Self {
		let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_owned);

		Self {
			id: raw.get("id").and_then(grant::id_from_value),
			nickname: text("username"),
			name: text("name"),
			avatar: text("threads_profile_picture_url"),
			raw: raw.clone(),
			token: None,
		}
	}

	/// Attaches the token obtained during the login.
	pub fn with_token(mut self, token: TokenGrant) -> Self {
		self.token = Some(token);

		self
	}

	/// Biography text from the raw payload.
	pub fn biography(&self) -> Option<&str> {
		self.raw.get("threads_biography").and_then(Value::as_str)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn maps_full_profile() {
		let raw = json!({
			"id": "1234",
			"username": "zuck",
			"name": "Mark",
			"threads_profile_picture_url": "https://cdn.example.com/p.jpg",
			"threads_biography": "hello",
		});
		let user = ThreadsUser::from_profile(&raw);

		assert_eq!(user.id.as_deref(), Some("1234"));
		assert_eq!(user.nickname.as_deref(), Some("zuck"));
		assert_eq!(user.name.as_deref(), Some("Mark"));
		assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/p.jpg"));
		assert_eq!(user.biography(), Some("hello"));
		assert_eq!(user.raw, raw);
	}

	#[test]
	fn missing_fields_map_to_none() {
		let user = ThreadsUser::from_profile(&json!({ "id": 42, "name": null }));

		assert_eq!(user.id.as_deref(), Some("42"));
		assert!(user.nickname.is_none());
		assert!(user.name.is_none());
		assert!(user.avatar.is_none());
		assert!(user.biography().is_none());

		let empty = ThreadsUser::from_profile(&json!({}));

		assert!(empty.id.is_none());
	}

	#[test]
	fn mapping_is_idempotent() {
		let raw = json!({ "id": "1", "username": "a", "threads_biography": "b" });

		assert_eq!(ThreadsUser::from_profile(&raw), ThreadsUser::from_profile(&raw));
		assert_eq!(
			ThreadsUser::from_profile(&ThreadsUser::from_profile(&raw).raw),
			ThreadsUser::from_profile(&raw)
		);
	}
}
