//! Token endpoint dispatcher.
//!
//! [`TokenIssuer`] authenticates the client, resolves `grant_type` against the strategy
//! registry, and hands the request to the matching handler. Every failure path resolves to
//! a single [`OAuth2Error`]; [`TokenIssuer::token_endpoint`] pairs it with the HTTP status.

/// Builder API for assembling token issuers.
pub mod builder;
/// Wire-level token endpoint responses.
pub mod response;

pub use builder::*;
pub use response::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	authenticator::ClientAuthenticator,
	oauth::OAuth2Error,
	obs::{self, IssueOutcome, IssueSpan},
	request::TokenRequest,
	security::EntropySource,
	settings::IssuerSettings,
	store::Persistence,
	strategy::{GrantContext, Registry},
};

/// Immutable token issuer shared across concurrent requests.
#[derive(Clone)]
pub struct TokenIssuer {
	authenticator: ClientAuthenticator,
	registry: Registry,
	entropy: Arc<dyn EntropySource>,
	settings: IssuerSettings,
}
impl TokenIssuer {
	/// Starts configuring an issuer backed by `persistence`.
	pub fn builder(persistence: Arc<dyn Persistence>) -> TokenIssuerBuilder {
		TokenIssuerBuilder::new(persistence)
	}

	/// Strategy registry frozen at build time.
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Settings applied by the grant strategies.
	pub fn settings(&self) -> &IssuerSettings {
		&self.settings
	}

	/// Processes one token request.
	///
	/// The client is authenticated before `grant_type` is looked at, so a request with bad
	/// credentials and an unknown grant reports `invalid_client`.
	pub async fn issue(&self, request: &TokenRequest) -> Result<AccessToken, OAuth2Error> {
		let label = self.grant_label(request);
		let span = IssueSpan::new("issue");

		span.record_grant(label);

		let result = span.instrument(self.dispatch(request)).await;

		match &result {
			Ok(_) => obs::record_issue_outcome(label, IssueOutcome::Issued),
			Err(e) => {
				obs::log_rejection("issue", e);
				obs::record_issue_outcome(label, IssueOutcome::Rejected(e.kind));
			},
		}

		result
	}

	/// Processes one token request and renders the transport-agnostic response.
	pub async fn token_endpoint(&self, request: &TokenRequest) -> TokenEndpointResponse {
		match self.issue(request).await {
			Ok(token) => TokenEndpointResponse::issued(token.response()),
			Err(e) => TokenEndpointResponse::rejected(e),
		}
	}

	/// Metrics and span label: the registered identifier the request resolves to, else
	/// [`obs::UNSUPPORTED_GRANT_LABEL`]. Uses the same read as dispatch.
	fn grant_label(&self, request: &TokenRequest) -> &str {
		request
			.params
			.unique_non_empty("grant_type")
			.ok()
			.flatten()
			.and_then(|identifier| self.registry.grant_identifier(identifier))
			.unwrap_or(obs::UNSUPPORTED_GRANT_LABEL)
	}

	async fn dispatch(&self, request: &TokenRequest) -> Result<AccessToken, OAuth2Error> {
		let client = self.authenticator.authenticate(request).await?;
		let Some(handler) = request
			.params
			.unique_non_empty("grant_type")?
			.and_then(|identifier| self.registry.grant_type(identifier))
		else {
			return Err(OAuth2Error::unsupported_grant_type());
		};

		handler
			.issue_token(GrantContext {
				client: &client,
				params: &request.params,
				entropy: self.entropy.as_ref(),
				settings: &self.settings,
			})
			.await
	}
}
impl Debug for TokenIssuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenIssuer")
			.field("registry", &self.registry)
			.field("settings", &self.settings)
			.finish()
	}
}
