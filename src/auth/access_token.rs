//! Bearer access tokens minted by grant strategies.

// self
use crate::{
	_prelude::*,
	auth::{Client, ScopeList, Secret, User},
	issuer::TokenResponse,
	security::{self, EntropyError, EntropySource, OsEntropy},
};

/// Number of random bytes backing an access token value.
pub const ACCESS_TOKEN_BYTES: usize = 256;
/// Advisory lifetime of every issued access token.
pub const ACCESS_TOKEN_TTL: Duration = Duration::days(15);

/// Access token issued to a client (RFC 6749 §1.4).
///
/// Tokens are created once per successful issuance and never mutated; expiry is metadata
/// only, nothing here enforces it.
#[derive(Clone, Debug)]
pub struct AccessToken {
	/// Client the token was issued to.
	pub client: Client,
	/// Resource owner, absent for client-only grants.
	pub user: Option<User>,
	/// Granted scopes, copied from the grant request.
	pub scopes: ScopeList,
	/// Random token value.
	pub token: Secret,
	/// Issuance instant (UTC).
	pub issued_at: OffsetDateTime,
	/// Validity window measured from `issued_at`.
	pub expires_in: Duration,
	/// Refresh token, unset for the built-in grants.
	pub refresh_token: Option<Secret>,
}
impl AccessToken {
	/// Mints a token from OS entropy.
	pub fn new(client: Client, user: Option<User>, scopes: ScopeList) -> Result<Self, EntropyError> {
		Self::new_with(&OsEntropy, client, user, scopes)
	}

	/// Mints a token from `source`.
	pub fn new_with(
		source: &dyn EntropySource,
		client: Client,
		user: Option<User>,
		scopes: ScopeList,
	) -> Result<Self, EntropyError> {
		let token = Secret::new(security::generate_random_with(source, ACCESS_TOKEN_BYTES)?);

		Ok(Self {
			client,
			user,
			scopes,
			token,
			issued_at: OffsetDateTime::now_utc(),
			expires_in: ACCESS_TOKEN_TTL,
			refresh_token: None,
		})
	}

	/// Instant after which the token should be considered stale.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.issued_at + self.expires_in
	}

	/// Returns `true` if the token is past its advisory expiry at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at()
	}

	/// Builds the wire-level token endpoint response.
	pub fn response(&self) -> TokenResponse {
		TokenResponse::from(self)
	}
}
