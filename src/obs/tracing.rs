// self
use crate::{_prelude::*, oauth::OAuth2Error};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedIssue<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedIssue<F> = F;

/// Span wrapping one token request.
#[derive(Clone, Debug)]
pub struct IssueSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl IssueSpan {
	/// Creates a span tagged with the call-site stage; `grant_type` is recorded later.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_issuer.token",
				stage,
				grant_type = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Records the resolved grant type on the span.
	pub fn record_grant(&self, grant_type: &str) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("grant_type", grant_type);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = grant_type;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedIssue<Fut>
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

/// Logs an internal failure that is about to be reported as `server_error`.
///
/// The detail stays in the log; the response only carries the canonical description.
pub fn log_internal_failure(stage: &'static str, detail: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(stage, error = %detail, "internal failure coerced to server_error");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, detail);
	}
}

/// Logs a protocol rejection by error identifier only.
pub fn log_rejection(stage: &'static str, error: &OAuth2Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			stage,
			error = error.kind.as_str(),
			status = error.status(),
			"token request rejected"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, error);
	}
}

/// Logs a strategy registration that replaced an earlier handler for the same identifier.
pub fn log_replaced_registration(axis: &'static str, identifier: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(axis, identifier, "strategy identifier registered twice; the later handler wins");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (axis, identifier);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = IssueSpan::new("instrument_wraps_future");

		span.record_grant("client_credentials");

		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn log_helpers_accept_any_error() {
		log_rejection("test", &OAuth2Error::access_denied());
		log_internal_failure("test", &crate::store::LookupError::Backend { message: "x".into() });
	}
}
