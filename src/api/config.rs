// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Connection settings for [`ThreadsClient`](crate::api::ThreadsClient).
///
/// Every field has a default, so hosts can deserialize a partial section of their own
/// configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Bearer token; empty until configured.
	pub token: TokenSecret,
	/// Graph base URL.
	pub base_url: String,
	/// API version segment inserted between the base URL and the path.
	pub api_version: String,
}
impl ClientConfig {
	/// Default Graph base URL.
	pub const DEFAULT_BASE_URL: &str = "https://graph.threads.net/";
	/// Default API version.
	pub const DEFAULT_API_VERSION: &str = "v1.0";

	/// Resolves `{base_url}{api_version}/{path}`.
	pub fn versioned_url(&self, path: &str) -> Result<Url> {
		let raw = format!(
			"{}{}/{}",
			self.base(),
			self.api_version.trim_matches('/'),
			path.trim_start_matches('/')
		);

		parse_url(raw)
	}

	/// Resolves `{base_url}{path}` for the unversioned token endpoints.
	pub fn unversioned_url(&self, path: &str) -> Result<Url> {
		parse_url(format!("{}{}", self.base(), path.trim_start_matches('/')))
	}

	fn base(&self) -> String {
		format!("{}/", self.base_url.trim_end_matches('/'))
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			token: TokenSecret::default(),
			base_url: Self::DEFAULT_BASE_URL.into(),
			api_version: Self::DEFAULT_API_VERSION.into(),
		}
	}
}

fn parse_url(raw: String) -> Result<Url> {
	Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source }.into())
}
