//! Optional observability helpers for Graph API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `threads.api` carrying the `operation`
//!   field, plus `debug` events for publish delays and skipped notifications.
//! - Enable `metrics` to increment the `threads_api_call_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Graph API operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `GET {user}`.
	Profiles,
	/// `GET {user}/threads`.
	Posts,
	/// `GET {id}` for a single post.
	Single,
	/// `GET {user}/replies`.
	Replies,
	/// `GET keyword_search`.
	Search,
	/// `POST me/threads`.
	CreateContainer,
	/// `POST me/threads_publish`.
	Publish,
	/// `GET {id}` for container status.
	Status,
	/// `GET {user}/threads_publishing_limit`.
	Quota,
	/// `POST {id}/repost`.
	Repost,
	/// `DELETE {id}`.
	Delete,
	/// `GET access_token`.
	ExchangeToken,
	/// `GET refresh_access_token`.
	RefreshToken,
	/// `POST oauth/access_token`.
	AuthorizationCode,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Profiles => "profiles",
			Operation::Posts => "posts",
			Operation::Single => "single",
			Operation::Replies => "replies",
			Operation::Search => "search",
			Operation::CreateContainer => "create_container",
			Operation::Publish => "publish",
			Operation::Status => "status",
			Operation::Quota => "quota",
			Operation::Repost => "repost",
			Operation::Delete => "delete",
			Operation::ExchangeToken => "exchange_token",
			Operation::RefreshToken => "refresh_token",
			Operation::AuthorizationCode => "authorization_code",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client method.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
