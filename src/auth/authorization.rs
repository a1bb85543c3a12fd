//! Pending and granted user authorizations consumed by response-type strategies.

// self
use crate::{
	_prelude::*,
	auth::{ACCESS_TOKEN_BYTES, Client, ScopeList, Secret},
	security::{self, EntropyError, EntropySource},
};

/// Request for a user to authorize a client (RFC 6749 §4.1, §4.2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAuthorizationRequest {
	/// Client asking for access.
	pub client: Client,
	/// Requested scopes.
	pub scope: ScopeList,
}

/// Authorization a user granted to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAuthorization {
	/// Request that was approved.
	pub request: UserAuthorizationRequest,
	/// Refresh token bound to the grant.
	pub refresh_token: Secret,
}
impl UserAuthorization {
	/// Approves `request`, minting a refresh token from `source`.
	pub fn grant_with(
		request: UserAuthorizationRequest,
		source: &dyn EntropySource,
	) -> Result<Self, EntropyError> {
		let refresh_token = Secret::new(security::generate_random_with(source, ACCESS_TOKEN_BYTES)?);

		Ok(Self { request, refresh_token })
	}
}
