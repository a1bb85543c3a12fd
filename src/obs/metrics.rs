// self
use crate::obs::IssueOutcome;

/// Records a token request outcome via the global metrics recorder (when enabled).
pub fn record_issue_outcome(grant_type: &str, outcome: IssueOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_issuer_token_total",
			"grant_type" => grant_type.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (grant_type, outcome);
	}
}
