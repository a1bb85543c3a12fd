//! Library-level error types shared by configuration, storage, and primitives.
//!
//! These never reach a token endpoint response directly; see [`crate::oauth::OAuth2Error`]
//! for the protocol taxonomy and the conversions that coerce these into `server_error`.

// self
use crate::{
	_prelude::*,
	security::{EncodingError, EntropyError},
	store::LookupError,
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical library error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Persistence-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		LookupError,
	),
	/// Server configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Random generation failure.
	#[error(transparent)]
	Entropy(#[from] EntropyError),
	/// Secret text could not be decoded.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
}

/// Configuration failures raised while assembling an issuer.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A strategy registered an empty identifier.
	#[error("A {axis} strategy was registered with an empty identifier.")]
	EmptyIdentifier {
		/// Registration axis (`grant_type` or `response_type`).
		axis: &'static str,
	},
	/// A strategy identifier contains whitespace.
	#[error("The {axis} identifier `{identifier}` contains whitespace.")]
	IdentifierContainsWhitespace {
		/// Registration axis (`grant_type` or `response_type`).
		axis: &'static str,
		/// Offending identifier.
		identifier: String,
	},
	/// No grant type was registered, so the token endpoint could never succeed.
	#[error("At least one grant type strategy must be registered.")]
	NoGrantTypes,
	/// Issuer settings could not be parsed.
	#[error("Issuer settings are invalid at `{}`.", .source.path())]
	InvalidSettings {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
