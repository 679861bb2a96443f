//! Token endpoint responses.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Access token issued by one of the Threads token endpoints.
///
/// The authorization-code endpoint answers with `access_token` + `user_id`, while the
/// long-lived exchange and refresh endpoints add `token_type` and `expires_in`; every field
/// besides the token itself is therefore optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Token type reported by the endpoint (usually `bearer`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_type: Option<String>,
	/// Lifetime in seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<i64>,
	/// Threads user that owns the token.
	#[serde(
		default,
		deserialize_with = "deserialize_id",
		skip_serializing_if = "Option::is_none"
	)]
	pub user_id: Option<String>,
}
impl TokenGrant {
	/// Expiry instant relative to `issued_at`, when the endpoint reported a representable lifetime.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		self.expires_in.and_then(|secs| issued_at.checked_add(Duration::seconds(secs)))
	}
}

/// Graph identifiers arrive as strings from most endpoints but as numbers from a few.
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(id_from_value))
}
