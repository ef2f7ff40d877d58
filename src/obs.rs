//! Optional observability for the three sign-in operations.
//!
//! # Feature Flags
//!
//! - `tracing`: each operation runs inside a `steam_openid_broker.flow` span whose `flow` field
//!   names the operation.
//! - `metrics`: each operation increments `steam_openid_broker_flow_total`, labeled by `flow` and
//!   `outcome`, once on entry and once on completion.
//!
//! No log events are emitted; spans and counters reach the host only through the subscriber or
//! recorder it installs.

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Building the OpenID redirect URL.
	Authorize,
	/// Confirming a callback assertion with the provider.
	ValidateCallback,
	/// Fetching a player summary.
	FetchProfile,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Authorize => "authorize",
			FlowKind::ValidateCallback => "validate_callback",
			FlowKind::FetchProfile => "fetch_profile",
		}
	}

	#[cfg(feature = "tracing")]
	fn span(self) -> tracing::Span {
		tracing::info_span!("steam_openid_broker.flow", flow = self.as_str())
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}

	/// Maps an operation result to its outcome label.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => FlowOutcome::Success,
			Err(_) => FlowOutcome::Failure,
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs a network-bound operation inside its span and records attempt + outcome.
pub(crate) async fn observe<T, Fut>(kind: FlowKind, operation: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	record(kind, FlowOutcome::Attempt);

	#[cfg(feature = "tracing")]
	let result = tracing::Instrument::instrument(operation, kind.span()).await;
	#[cfg(not(feature = "tracing"))]
	let result = operation.await;

	record(kind, FlowOutcome::of(&result));

	result
}

/// Synchronous counterpart of [`observe`] for operations that make no request.
pub(crate) fn observe_sync<T>(kind: FlowKind, operation: impl FnOnce() -> Result<T>) -> Result<T> {
	record(kind, FlowOutcome::Attempt);

	#[cfg(feature = "tracing")]
	let _entered = kind.span().entered();
	let result = operation();

	record(kind, FlowOutcome::of(&result));

	result
}

fn record(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"steam_openid_broker_flow_total",
		"flow" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}
