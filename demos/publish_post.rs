//! Stages a text post, checks the container, and publishes it.
//!
//! Reads the long-lived token from `THREADS_TOKEN`.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use threads_sdk::api::{CreateOptions, ReplyControl, ThreadsClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let token = env::var("THREADS_TOKEN").map_err(|_| eyre!("Set THREADS_TOKEN first."))?;
	let client = ThreadsClient::new().with_token(token);
	let quota = client.quota("me", None).await?;

	println!("Publishing quota: {quota}.");

	let options = CreateOptions::new().reply_control(ReplyControl::AccountsYouFollow);
	let id = client.create_text("Hello from threads-sdk!", Some(&options)).await?;
	let status = client.status(&id, None).await?;

	println!("Container {id} status: {}.", status["status"]);

	let published = client.publish(&id, 0).await?;

	println!("Published post {}.", published["id"]);

	Ok(())
}
