//! Built-in grant-type strategies.
//!
//! Only the two grants that need no authorization endpoint ship here: `client_credentials`
//! (RFC 6749 §4.4) and the resource owner `password` grant (RFC 6749 §4.3).

mod client_credentials;
mod password;

pub use client_credentials::*;
pub use password::*;

// self
use crate::{
	_prelude::*,
	auth::ScopeList,
	oauth::OAuth2Error,
	request::TokenParams,
	settings::{AbsentScopePolicy, IssuerSettings},
};

/// Grant types provided by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
	/// Resource Owner Password Credentials grant.
	Password,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
			GrantType::Password => "password",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Reads the `scope` parameter verbatim, applying the absent-scope policy.
pub(crate) fn requested_scopes(
	params: &TokenParams,
	settings: &IssuerSettings,
) -> Result<ScopeList, OAuth2Error> {
	let raw = params.unique("scope")?.unwrap_or_default();

	if raw.is_empty() && settings.absent_scope == AbsentScopePolicy::EmptyList {
		return Ok(ScopeList::default());
	}

	Ok(ScopeList::parse(raw))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scope_parameter_is_split_verbatim() {
		let params = TokenParams::default().with("scope", "basic email");
		let scopes = requested_scopes(&params, &IssuerSettings::default())
			.expect("Scope parameter should parse.");

		assert_eq!(scopes.as_slice(), ["basic", "email"]);
	}

	#[test]
	fn absent_scope_follows_policy() {
		let params = TokenParams::default();
		let literal = requested_scopes(&params, &IssuerSettings::default())
			.expect("Absent scope should parse.");
		let settings =
			IssuerSettings { absent_scope: AbsentScopePolicy::EmptyList, ..Default::default() };
		let empty = requested_scopes(&params.clone().with("scope", ""), &settings)
			.expect("Empty scope should parse.");

		assert_eq!(literal.as_slice(), [""]);
		assert!(empty.is_empty());
	}

	#[test]
	fn repeated_scope_is_invalid_request() {
		let params = TokenParams::default().with("scope", "a").with("scope", "b");

		assert!(requested_scopes(&params, &IssuerSettings::default()).is_err());
	}
}
