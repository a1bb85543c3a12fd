//! Grant-type and response-type strategies (behavior) plus the registry that maps protocol
//! identifiers onto them.
//!
//! A [`Strategy`] contributes at most one handler per axis. Each contribution is a
//! [`Registration`] that always carries a handler, so "identifier without handler" cannot be
//! expressed; identifier validity is checked once when the [`Registry`] is built.

pub mod registry;

pub use registry::*;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Client, UserAuthorization, UserAuthorizationRequest},
	oauth::OAuth2Error,
	request::TokenParams,
	security::EntropySource,
	settings::IssuerSettings,
	store::Persistence,
};

/// Boxed future returned by [`GrantTypeHandler::issue_token`].
pub type GrantFuture<'a> =
	Pin<Box<dyn Future<Output = Result<AccessToken, OAuth2Error>> + 'a + Send>>;

/// Everything a grant handler may consult for one request.
#[derive(Clone, Copy)]
pub struct GrantContext<'a> {
	/// Client that already passed authentication.
	pub client: &'a Client,
	/// Form parameters of the token request.
	pub params: &'a TokenParams,
	/// Entropy source for minting token values.
	pub entropy: &'a dyn EntropySource,
	/// Issuer-wide settings.
	pub settings: &'a IssuerSettings,
}
impl Debug for GrantContext<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GrantContext")
			.field("client", &self.client.id)
			.field("params", &self.params.iter().map(|(key, _)| key).collect::<Vec<_>>())
			.field("settings", self.settings)
			.finish()
	}
}

/// Token endpoint handler for one `grant_type` value (RFC 6749 §4).
pub trait GrantTypeHandler
where
	Self: Send + Sync,
{
	/// Validates grant-specific parameters and mints a token for the authenticated client.
	fn issue_token<'a>(&'a self, ctx: GrantContext<'a>) -> GrantFuture<'a>;
}

/// Authorization endpoint handler for one `response_type` value (RFC 6749 §3.1.1).
pub trait ResponseTypeHandler
where
	Self: Send + Sync,
{
	/// Turns an approved request into a user authorization.
	fn authorize(
		&self,
		request: UserAuthorizationRequest,
		entropy: &dyn EntropySource,
	) -> Result<UserAuthorization, OAuth2Error>;
}

/// Identifier + handler pair contributed by a strategy.
pub struct Registration<H>
where
	H: ?Sized,
{
	/// Protocol identifier (`grant_type` or `response_type` value).
	pub identifier: String,
	/// Handler bound to the identifier.
	pub handler: Arc<H>,
}
impl<H> Registration<H>
where
	H: ?Sized,
{
	/// Pairs `identifier` with `handler`.
	pub fn new(identifier: impl Into<String>, handler: Arc<H>) -> Self {
		Self { identifier: identifier.into(), handler }
	}
}
impl<H> Debug for Registration<H>
where
	H: ?Sized,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Registration").field("identifier", &self.identifier).finish()
	}
}

/// Registration hook implemented by every grant/response-type bundle.
///
/// Both methods default to contributing nothing; override the axis the strategy serves.
/// They run once while the issuer is being configured and receive the persistence port so
/// handlers can keep the lookups they need.
pub trait Strategy {
	/// Response-type handler contributed by the strategy, if any.
	fn response_type(
		&self,
		_persistence: &Arc<dyn Persistence>,
	) -> Option<Registration<dyn ResponseTypeHandler>> {
		None
	}

	/// Grant-type handler contributed by the strategy, if any.
	fn grant_type(
		&self,
		_persistence: &Arc<dyn Persistence>,
	) -> Option<Registration<dyn GrantTypeHandler>> {
		None
	}
}
