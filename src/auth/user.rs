//! Resource owners authenticated by the password grant.

// self
use crate::{_prelude::*, security};

/// Resource-owner password bytes.
///
/// Compare through [`Password::verify`], which runs in constant time; the type has no
/// `PartialEq`.
#[derive(Clone)]
pub struct Password(Vec<u8>);
impl Password {
	/// Wraps raw password bytes.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	/// Returns true when `candidate` matches the stored password.
	pub fn verify(&self, candidate: &[u8]) -> bool {
		security::constant_time_eq(&self.0, candidate)
	}
}
impl Debug for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Password").field(&"<redacted>").finish()
	}
}

/// Resource owner known to the persistence layer.
#[derive(Clone, Debug)]
pub struct User {
	/// Unique login name.
	pub username: String,
	/// Stored password credential.
	pub password: Password,
}
impl User {
	/// Creates a user record.
	pub fn new(username: impl Into<String>, password: impl Into<Vec<u8>>) -> Self {
		Self { username: username.into(), password: Password::new(password) }
	}
}
