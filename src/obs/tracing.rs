// self
use crate::{_prelude::*, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapping a single Graph API call.
#[derive(Clone, Debug)]
pub struct ApiSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ApiSpan {
	/// Creates a new span tagged with the provided operation.
	pub fn new(operation: Operation) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("threads.api", operation = operation.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = operation;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Notes the fixed delay awaited before publishing a container.
pub fn record_publish_delay(container_id: &str, delay: StdDuration) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(container_id, delay_secs = delay.as_secs(), "delaying publish");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (container_id, delay);
	}
}

/// Notes a notification that produced no Threads message.
pub fn record_skipped_notification() {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!("notification produced no Threads message; nothing sent");
	}
}
