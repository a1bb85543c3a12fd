//! Optional observability helpers for token issuance.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit spans named `oauth2_issuer.token` with the `stage`
//!   and `grant_type` fields, plus events for rejected requests and coerced internal failures.
//! - Enable `metrics` to increment the `oauth2_issuer_token_total` counter for every token
//!   request, labeled by `grant_type` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, oauth::ErrorKind};

/// Grant label used when the request named no registered grant type.
pub const UNSUPPORTED_GRANT_LABEL: &str = "unsupported";

/// Outcome labels recorded for each token request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueOutcome {
	/// A token was minted.
	Issued,
	/// The request failed with the given protocol error.
	Rejected(ErrorKind),
}
impl IssueOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			IssueOutcome::Issued => "issued",
			IssueOutcome::Rejected(kind) => kind.as_str(),
		}
	}
}
impl Display for IssueOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
