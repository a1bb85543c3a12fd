//! RFC 6749 §5.2 error taxonomy returned by the token endpoint.
//!
//! Every failure path in the crate resolves to exactly one [`OAuth2Error`]. Internal failures
//! (storage, entropy) are coerced into [`ErrorKind::ServerError`] by the `From` conversions
//! below, which drop the underlying detail so it never reaches a response body.

// self
use crate::{_prelude::*, security::EntropyError};

/// Fixed set of protocol error identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	/// Malformed, missing, or duplicated required parameter.
	InvalidRequest,
	/// Client authentication failed or the client is unknown.
	InvalidClient,
	/// Grant or refresh token is invalid, expired, or mismatched.
	InvalidGrant,
	/// Requested scope is invalid or unknown.
	InvalidScope,
	/// Client is not permitted to use this grant type.
	UnauthorizedClient,
	/// Resource-owner credentials did not match.
	AccessDenied,
	/// Unexpected internal condition.
	ServerError,
	/// `grant_type` is missing or not registered.
	UnsupportedGrantType,
}
impl ErrorKind {
	/// Every identifier, in table order.
	pub const ALL: [ErrorKind; 8] = [
		ErrorKind::InvalidRequest,
		ErrorKind::InvalidClient,
		ErrorKind::InvalidGrant,
		ErrorKind::InvalidScope,
		ErrorKind::UnauthorizedClient,
		ErrorKind::AccessDenied,
		ErrorKind::ServerError,
		ErrorKind::UnsupportedGrantType,
	];

	/// Returns the RFC 6749 `error` identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorKind::InvalidRequest => "invalid_request",
			ErrorKind::InvalidClient => "invalid_client",
			ErrorKind::InvalidGrant => "invalid_grant",
			ErrorKind::InvalidScope => "invalid_scope",
			ErrorKind::UnauthorizedClient => "unauthorized_client",
			ErrorKind::AccessDenied => "access_denied",
			ErrorKind::ServerError => "server_error",
			ErrorKind::UnsupportedGrantType => "unsupported_grant_type",
		}
	}

	/// HTTP status code paired with the identifier.
	pub const fn status(self) -> u16 {
		match self {
			ErrorKind::InvalidRequest
			| ErrorKind::InvalidGrant
			| ErrorKind::InvalidScope
			| ErrorKind::UnsupportedGrantType => 400,
			ErrorKind::InvalidClient | ErrorKind::UnauthorizedClient | ErrorKind::AccessDenied =>
				401,
			ErrorKind::ServerError => 500,
		}
	}

	/// Canonical human-readable description.
	pub const fn description(self) -> &'static str {
		match self {
			ErrorKind::InvalidRequest =>
				"The request is missing a required parameter, includes an unsupported parameter value (other than grant type), repeats a parameter, includes multiple credentials, utilizes more than one mechanism for authenticating the client, or is otherwise malformed.",
			ErrorKind::InvalidClient =>
				"Client authentication failed (e.g., unknown client, no client authentication included, or unsupported authentication method).",
			ErrorKind::InvalidGrant =>
				"The provided authorization grant (e.g., authorization code, resource owner credentials) or refresh token is invalid, expired, revoked, does not match the redirection URI used in the authorization request, or was issued to another client.",
			ErrorKind::InvalidScope => "The requested scope is invalid, unknown, or malformed.",
			ErrorKind::UnauthorizedClient =>
				"The authenticated client is not authorized to use this authorization grant type.",
			ErrorKind::AccessDenied => "The resource owner or authorization server denied the request.",
			ErrorKind::ServerError =>
				"The authorization server encountered an unexpected condition that prevented it from fulfilling the request.",
			ErrorKind::UnsupportedGrantType =>
				"The authorization grant type is not supported by the authorization server.",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Protocol error value serialized as `{"error": .., "error_description": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("OAuth 2.0 error `{kind}`.")]
pub struct OAuth2Error {
	/// Error identifier.
	#[serde(rename = "error")]
	pub kind: ErrorKind,
	/// Optional human-readable description.
	#[serde(rename = "error_description", default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
impl OAuth2Error {
	/// Creates an error carrying the canonical description for `kind`.
	pub fn new(kind: ErrorKind) -> Self {
		Self { kind, description: Some(kind.description().to_owned()) }
	}

	/// Replaces the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Drops the description.
	pub fn without_description(mut self) -> Self {
		self.description = None;

		self
	}

	/// HTTP status code for this error.
	pub fn status(&self) -> u16 {
		self.kind.status()
	}

	/// `invalid_request` with the canonical description.
	pub fn invalid_request() -> Self {
		Self::new(ErrorKind::InvalidRequest)
	}

	/// `invalid_client` with the canonical description.
	pub fn invalid_client() -> Self {
		Self::new(ErrorKind::InvalidClient)
	}

	/// `access_denied` with the canonical description.
	pub fn access_denied() -> Self {
		Self::new(ErrorKind::AccessDenied)
	}

	/// `server_error` with the canonical description.
	pub fn server_error() -> Self {
		Self::new(ErrorKind::ServerError)
	}

	/// `unsupported_grant_type` with the canonical description.
	pub fn unsupported_grant_type() -> Self {
		Self::new(ErrorKind::UnsupportedGrantType)
	}
}
impl From<ErrorKind> for OAuth2Error {
	fn from(kind: ErrorKind) -> Self {
		Self::new(kind)
	}
}
impl From<Error> for OAuth2Error {
	fn from(_: Error) -> Self {
		Self::server_error()
	}
}
impl From<EntropyError> for OAuth2Error {
	fn from(e: EntropyError) -> Self {
		Error::from(e).into()
	}
}
