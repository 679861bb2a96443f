// crates.io
use oauth2::http::Method;
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	api::{FieldSet, ThreadsClient},
	auth::{TokenGrant, TokenSecret},
	error::ConfigError,
	http::{ApiRequest, ThreadsHttpClient},
	oauth::{AuthorizationSession, ThreadsUser, session},
	obs::Operation,
};

/// Threads authorize endpoint.
pub const AUTHORIZE_ENDPOINT: &str = "https://threads.net/oauth/authorize";
/// Scopes requested when none are configured.
pub const DEFAULT_SCOPES: &[&str] = &["threads_basic", "threads_content_publish"];
/// Profile fields fetched after login.
pub const LOGIN_PROFILE_FIELDS: &[&str] =
	&["id", "username", "name", "threads_profile_picture_url", "threads_biography"];

/// Graph API version used for the login profile lookup, independent of the wrapped client.
pub const LOGIN_API_VERSION: &str = "v1.0";

const SCOPE_SEPARATOR: &str = ",";

/// OAuth application credentials, usually loaded from the host's service configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Threads app id.
	pub client_id: String,
	/// Threads app secret.
	pub client_secret: TokenSecret,
	/// Callback URL registered with the app.
	#[serde(alias = "redirect")]
	pub redirect_uri: Url,
	/// Requested scopes.
	#[serde(default = "default_scopes")]
	pub scopes: Vec<String>,
}
impl ProviderConfig {
	/// Creates a configuration requesting the default scopes.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<TokenSecret>,
		redirect_uri: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri,
			scopes: default_scopes(),
		}
	}
}

fn default_scopes() -> Vec<String> {
	DEFAULT_SCOPES.iter().map(|s| (*s).to_owned()).collect()
}

/// Authorization-code login against Threads.
///
/// Token and profile calls reuse a [`ThreadsClient`], so the provider shares its transport,
/// base URL, and API version.
pub struct ThreadsProvider<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	config: ProviderConfig,
	authorize_endpoint: String,
	client: ThreadsClient<C>,
}
impl<C> ThreadsProvider<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Creates a provider on top of the caller-provided transport.
	pub fn with_http_client(config: ProviderConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self::with_client(config, ThreadsClient::with_http_client(http_client))
	}

	/// Creates a provider reusing an existing client's transport and base URL.
	///
	/// The profile lookup always uses [`LOGIN_API_VERSION`], whatever version the client
	/// is set to.
	pub fn with_client(config: ProviderConfig, client: ThreadsClient<C>) -> Self {
		Self { config, authorize_endpoint: AUTHORIZE_ENDPOINT.into(), client }
	}

	/// Overrides the authorize endpoint.
	pub fn with_authorize_endpoint(mut self, url: impl Into<String>) -> Self {
		self.authorize_endpoint = url.into();

		self
	}

	/// Overrides the Graph base URL used for the token and profile calls.
	pub fn with_graph_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.client = self.client.with_base_url(base_url);

		self
	}

	/// Adds scopes to the configured list, keeping order and skipping duplicates.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for scope in scopes {
			let scope = scope.into();

			if !self.config.scopes.contains(&scope) {
				self.config.scopes.push(scope);
			}
		}

		self
	}

	/// Replaces the configured scopes.
	pub fn set_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.config.scopes.clear();

		self.with_scopes(scopes)
	}

	/// Provider configuration.
	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	/// Client used for the token and profile calls.
	pub fn client(&self) -> &ThreadsClient<C> {
		&self.client
	}

	/// Builds the authorize URL carrying `state`.
	pub fn authorization_url(&self, state: &str) -> Result<Url> {
		let mut url = Url::parse(&self.authorize_endpoint).map_err(|source| {
			ConfigError::InvalidUrl { url: self.authorize_endpoint.clone(), source }
		})?;
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("client_id", &self.config.client_id);
		pairs.append_pair("redirect_uri", self.config.redirect_uri.as_str());
		pairs.append_pair("scope", &self.config.scopes.join(SCOPE_SEPARATOR));
		pairs.append_pair("response_type", "code");
		pairs.append_pair("state", state);

		drop(pairs);

		Ok(url)
	}

	/// Generates a fresh state and returns the session to persist until the callback.
	pub fn start_authorization(&self) -> Result<AuthorizationSession> {
		let state = session::random_state();
		let authorize_url = self.authorization_url(&state)?;

		Ok(AuthorizationSession::new(state, authorize_url))
	}

	/// Exchanges an authorization code for a short-lived access token.
	pub async fn exchange_code(&self, code: &str) -> Result<TokenGrant> {
		let url = self.client.config().unversioned_url("oauth/access_token")?;
		let request = ApiRequest::new(Method::POST, url).form([
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.expose()),
			("grant_type", "authorization_code"),
			("redirect_uri", self.config.redirect_uri.as_str()),
			("code", code),
		]);

		self.client.call(Operation::AuthorizationCode, request).await?.decode()
	}

	/// Fetches the raw `{graph}v1.0/me` profile for `token`.
	pub async fn fetch_profile(&self, token: &TokenSecret) -> Result<Value> {
		let fields = FieldSet::from_static(LOGIN_PROFILE_FIELDS);

		self.client
			.clone()
			.with_token(token.clone())
			.with_api_version(LOGIN_API_VERSION)
			.profiles("me", Some(&fields))
			.await
	}

	/// Finishes the login after the redirect back from Threads.
	///
	/// Nothing is sent when `returned_state` does not match the session.
	pub async fn complete_authorization(
		&self,
		session: &AuthorizationSession,
		returned_state: &str,
		code: &str,
	) -> Result<ThreadsUser> {
		session.validate_state(returned_state)?;

		let grant = self.exchange_code(code).await?;
		let profile = self.fetch_profile(&grant.access_token).await?;

		Ok(ThreadsUser::from_profile(&profile).with_token(grant))
	}
}
#[cfg(feature = "reqwest")]
impl ThreadsProvider<ReqwestHttpClient> {
	/// Creates a provider backed by a default reqwest transport.
	pub fn new(config: ProviderConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Debug for ThreadsProvider<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ThreadsProvider")
			.field("client_id", &self.config.client_id)
			.field("redirect_uri", &self.config.redirect_uri)
			.field("scopes", &self.config.scopes)
			.field("authorize_endpoint", &self.authorize_endpoint)
			.finish()
	}
}
