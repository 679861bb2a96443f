//! Delivers a release announcement through the notification channel.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use threads_sdk::{
	api::ThreadsClient,
	auth::{TokenSecret, TokenSource},
	notify::{ThreadsChannel, ThreadsMessage, ThreadsNotification},
};

struct Account {
	threads_token: Option<String>,
}
impl TokenSource for Account {
	fn threads_token(&self) -> Option<TokenSecret> {
		self.threads_token.threads_token()
	}
}

struct ReleasePublished {
	version: String,
	video_url: Option<String>,
}
impl ThreadsNotification<Account> for ReleasePublished {
	fn to_threads(&self, _: &Account) -> Option<ThreadsMessage> {
		let message = ThreadsMessage::new(format!("Version {} is out.", self.version));

		Some(match &self.video_url {
			Some(url) => message.with_video(url),
			None => message,
		})
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let account = Account { threads_token: env::var("THREADS_TOKEN").ok() };
	let notification =
		ReleasePublished { version: "0.1.0".into(), video_url: env::var("THREADS_VIDEO_URL").ok() };
	let channel = ThreadsChannel::new(ThreadsClient::new());

	match channel.send(&account, &notification).await? {
		Some(post) => println!("Published post {}.", post["id"]),
		None => println!("Nothing to publish."),
	}

	Ok(())
}
