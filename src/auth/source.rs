//! Pluggable token sources.
//!
//! Hosts usually keep Threads tokens next to their own user records. Implementing
//! [`TokenSource`] for such a record lets [`ThreadsClient::for_source`] and
//! [`ThreadsChannel::send`] resolve the bearer token per call.
//!
//! [`ThreadsClient::for_source`]: crate::api::ThreadsClient::for_source
//! [`ThreadsChannel::send`]: crate::notify::ThreadsChannel::send

// self
use crate::auth::TokenSecret;

/// Supplies the bearer token used for a call.
pub trait TokenSource {
	/// Returns the token, or `None` when the source has not linked a Threads account.
	fn threads_token(&self) -> Option<TokenSecret>;
}
impl TokenSource for TokenSecret {
	fn threads_token(&self) -> Option<TokenSecret> {
		(!self.is_empty()).then(|| self.clone())
	}
}
impl TokenSource for str {
	fn threads_token(&self) -> Option<TokenSecret> {
		(!self.is_empty()).then(|| TokenSecret::new(self))
	}
}
impl TokenSource for String {
	fn threads_token(&self) -> Option<TokenSecret> {
		self.as_str().threads_token()
	}
}
impl<T> TokenSource for Option<T>
where
	T: TokenSource,
{
	fn threads_token(&self) -> Option<TokenSecret> {
		self.as_ref().and_then(T::threads_token)
	}
}
