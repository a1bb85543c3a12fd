// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Secret},
	oauth::OAuth2Error,
};

/// Token type advertised for every issued token (RFC 6750).
pub const BEARER: &str = "bearer";

/// Successful token endpoint body (RFC 6749 §5.1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Encoded access token value.
	pub access_token: String,
	/// Always [`BEARER`].
	pub token_type: String,
	/// Lifetime in whole seconds.
	pub expires_in: u64,
	/// Encoded refresh token, omitted when none was issued.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
}
impl From<&AccessToken> for TokenResponse {
	fn from(token: &AccessToken) -> Self {
		Self {
			access_token: token.token.encode(),
			token_type: BEARER.into(),
			expires_in: u64::try_from(token.expires_in.whole_seconds()).unwrap_or_default(),
			refresh_token: token.refresh_token.as_ref().map(Secret::encode),
		}
	}
}

/// Body of a token endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenEndpointBody {
	/// Issued token.
	Token(TokenResponse),
	/// Protocol error.
	Error(OAuth2Error),
}

/// Status code plus body, ready for any HTTP layer to write out as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEndpointResponse {
	/// HTTP status code.
	pub status: u16,
	/// JSON body.
	pub body: TokenEndpointBody,
}
impl TokenEndpointResponse {
	/// `200 OK` with the token body.
	pub fn issued(token: TokenResponse) -> Self {
		Self { status: 200, body: TokenEndpointBody::Token(token) }
	}

	/// Error body with the status mapped from its identifier.
	pub fn rejected(error: OAuth2Error) -> Self {
		Self { status: error.status(), body: TokenEndpointBody::Error(error) }
	}

	/// Returns `true` for a successful issuance.
	pub fn is_success(&self) -> bool {
		matches!(self.body, TokenEndpointBody::Token(_))
	}
}
