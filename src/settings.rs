//! Issuer settings that pin down behavior RFC 6749 leaves to the server.

// self
use crate::{_prelude::*, error::ConfigError};

/// How the password grant reports a username with no matching record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownUserPolicy {
	/// Treat a missing user like any other lookup failure (`server_error`).
	#[default]
	ServerError,
	/// Report a missing user as `access_denied`, indistinguishable from a wrong password.
	AccessDenied,
}

/// How an absent or empty `scope` parameter is turned into a scope list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentScopePolicy {
	/// Split the empty string like any other value, yielding one empty entry.
	#[default]
	EmptyEntry,
	/// Yield an empty scope list.
	EmptyList,
}

/// Tunables applied by the built-in grant strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerSettings {
	/// Mapping for unknown resource owners in the password grant.
	pub unknown_user: UnknownUserPolicy,
	/// Mapping for requests without a usable `scope` parameter.
	pub absent_scope: AbsentScopePolicy,
}
impl IssuerSettings {
	/// Parses settings from JSON, reporting the path of the first invalid field.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(json);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::InvalidSettings { source })
	}
}
