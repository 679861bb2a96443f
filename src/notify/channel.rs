// self
use crate::{
	_prelude::*,
	api::ThreadsClient,
	auth::{TokenSecret, TokenSource},
	error::ConfigError,
	http::ThreadsHttpClient,
	notify::{MessageMedia, ThreadsMessage},
	obs,
};

/// Notification that can render itself as a Threads post for a recipient `N`.
pub trait ThreadsNotification<N>
where
	N: ?Sized,
{
	/// Returns the message to post, or `None` to skip this recipient.
	fn to_threads(&self, notifiable: &N) -> Option<ThreadsMessage>;
}
impl<N> ThreadsNotification<N> for ThreadsMessage
where
	N: ?Sized,
{
	fn to_threads(&self, _: &N) -> Option<ThreadsMessage> {
		Some(self.clone())
	}
}

/// Delivers notifications by creating and publishing one container per message.
pub struct ThreadsChannel<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	client: ThreadsClient<C>,
}
impl<C> ThreadsChannel<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Wraps a configured client; the per-recipient token replaces the client's own.
	pub fn new(client: ThreadsClient<C>) -> Self {
		Self { client }
	}

	/// Underlying client.
	pub fn client(&self) -> &ThreadsClient<C> {
		&self.client
	}

	/// Renders `notification` for `notifiable` and publishes it with the recipient's token.
	///
	/// Returns `Ok(None)` without sending anything when the notification yields no message.
	pub async fn send<N, T>(&self, notifiable: &N, notification: &T) -> Result<Option<Value>>
	where
		N: ?Sized + TokenSource,
		T: ?Sized + ThreadsNotification<N>,
	{
		let Some(message) = notification.to_threads(notifiable) else {
			obs::record_skipped_notification();

			return Ok(None);
		};
		let token = notifiable.threads_token().ok_or(ConfigError::MissingToken)?;

		self.deliver(token, &message).await.map(Some)
	}

	/// Stages the message's container and publishes it after `message.sleep` seconds.
	///
	/// A failed create is returned as-is and nothing is published.
	pub async fn deliver(&self, token: TokenSecret, message: &ThreadsMessage) -> Result<Value> {
		let client = self.client.clone().with_token(token);
		let text = Some(message.text.as_str());
		let id = match message.media() {
			MessageMedia::Video(url) => client.create_video(url, text, false, None).await?,
			MessageMedia::Image(url) => client.create_image(url, text, false, None).await?,
			MessageMedia::Text => client.create_text(&message.text, None).await?,
		};

		client.publish(&id, message.sleep).await
	}
}
impl<C> Clone for ThreadsChannel<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	fn clone(&self) -> Self {
		Self { client: self.client.clone() }
	}
}
impl<C> Debug for ThreadsChannel<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ThreadsChannel").field("client", &self.client).finish()
	}
}
