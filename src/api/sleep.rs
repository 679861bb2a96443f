// self
use crate::_prelude::*;

/// Boxed future returned by [`Sleeper::sleep`].
pub type SleepFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a + Send>>;

/// Waits out the fixed delay requested before publishing a container.
///
/// The platform needs time to process uploaded media before a container can be published;
/// callers choose the delay and the client simply waits. Swap the implementation to observe
/// or skip the wait.
pub trait Sleeper
where
	Self: Send + Sync,
{
	/// Completes once `duration` has elapsed.
	fn sleep(&self, duration: StdDuration) -> SleepFuture<'_>;
}

/// Default [`Sleeper`] backed by the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;
impl Sleeper for TokioSleeper {
	fn sleep(&self, duration: StdDuration) -> SleepFuture<'_> {
		Box::pin(tokio::time::sleep(duration))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test(start_paused = true)]
	async fn tokio_sleeper_waits_for_the_full_duration() {
		let started = tokio::time::Instant::now();

		TokioSleeper.sleep(StdDuration::from_secs(5)).await;

		assert!(started.elapsed() >= StdDuration::from_secs(5));
	}
}
