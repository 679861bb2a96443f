//! Long-lived token maintenance.
//!
//! These endpoints live outside the versioned Graph path and carry the token as a query
//! parameter instead of an `Authorization` header.

// self
use crate::{
	_prelude::*,
	api::ThreadsClient,
	auth::{TokenGrant, TokenSecret},
	http::{ApiRequest, ThreadsHttpClient},
	obs::Operation,
};

impl<C> ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Exchanges a short-lived token for a long-lived one.
	///
	/// The stored token is neither sent nor replaced; apply the result with
	/// [`with_token`](Self::with_token).
	pub async fn exchange_token(
		&self,
		short_lived: &TokenSecret,
		client_secret: &TokenSecret,
	) -> Result<TokenGrant> {
		let request = ApiRequest::get(self.config.unversioned_url("access_token")?)
			.query("grant_type", "th_exchange_token")
			.query("client_secret", client_secret.expose())
			.query("access_token", short_lived.expose());

		self.call(Operation::ExchangeToken, request).await?.decode()
	}

	/// Refreshes the stored long-lived token.
	pub async fn refresh_token(&self) -> Result<TokenGrant> {
		let request = ApiRequest::get(self.config.unversioned_url("refresh_access_token")?)
			.query("grant_type", "th_refresh_token")
			.query("access_token", self.config.token.expose());

		self.call(Operation::RefreshToken, request).await?.decode()
	}
}
