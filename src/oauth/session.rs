// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const STATE_LEN: usize = 32;

/// Authorization handshake metadata returned by
/// [`ThreadsProvider::start_authorization`](crate::oauth::ThreadsProvider::start_authorization).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationSession {
	/// Opaque anti-forgery value that must round-trip via the redirect handler.
	pub state: String,
	/// Fully-formed authorize URL that callers should send end-users to.
	pub authorize_url: Url,
}
impl AuthorizationSession {
	pub(super) fn new(state: String, authorize_url: Url) -> Self {
		Self { state, authorize_url }
	}

	/// Validates the returned `state` parameter after the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if !returned_state.is_empty() && returned_state == self.state {
			Ok(())
		} else {
			Err(Error::StateMismatch)
		}
	}
}

pub(super) fn random_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn state_validation_errors_on_mismatch() {
		let session = AuthorizationSession::new(
			"expected".into(),
			Url::parse("https://threads.net/oauth/authorize?state=expected")
				.expect("Authorization URL fixture should parse successfully."),
		);

		assert!(session.validate_state("expected").is_ok());
		assert!(matches!(session.validate_state("other"), Err(Error::StateMismatch)));
		assert!(matches!(session.validate_state(""), Err(Error::StateMismatch)));
	}

	#[test]
	fn random_states_are_alphanumeric_and_distinct() {
		let a = random_state();
		let b = random_state();

		assert_eq!(a.len(), STATE_LEN);
		assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
		assert_ne!(a, b);
	}
}
