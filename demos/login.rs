//! Walks through the OAuth login: build the authorize URL, then finish the callback with the
//! returned `state` and `code`.
//!
//! Run once without arguments to print the URL, then again with `<state> <returned_state> <code>`.

// std
use std::env;
// crates.io
use color_eyre::Result;
use url::Url;
// self
use threads_sdk::oauth::{AuthorizationSession, ProviderConfig, ThreadsProvider};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ProviderConfig::new(
		env::var("THREADS_CLIENT_ID").unwrap_or_else(|_| "demo-client".into()),
		env::var("THREADS_CLIENT_SECRET").unwrap_or_else(|_| "demo-secret".into()),
		Url::parse("https://app.example.com/auth/threads/callback")?,
	);
	let provider = ThreadsProvider::new(config).with_scopes(["threads_manage_replies"]);
	let args = env::args().skip(1).collect::<Vec<_>>();
	let [state, returned_state, code] = args.as_slice() else {
		let session = provider.start_authorization()?;

		println!("Send your user to {}.", session.authorize_url);
		println!("Keep state `{}` for the callback.", session.state);

		return Ok(());
	};
	let session = AuthorizationSession {
		state: state.clone(),
		authorize_url: provider.authorization_url(state)?,
	};
	let user = provider.complete_authorization(&session, returned_state, code).await?;

	println!(
		"Logged in as {} ({}).",
		user.nickname.as_deref().unwrap_or("unknown"),
		user.id.as_deref().unwrap_or("no id")
	);

	if let Some(grant) = user.token {
		let long_lived = provider
			.client()
			.exchange_token(&grant.access_token, &provider.config().client_secret)
			.await?;

		println!("Long-lived token expires in {:?} seconds.", long_lived.expires_in);
	}

	Ok(())
}
