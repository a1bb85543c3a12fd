//! Persistence port: client and user lookups consumed by the issuer.
//!
//! Implementations own their concurrency discipline; the issuer only needs each lookup to
//! return a consistent snapshot.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	auth::{Client, ClientId, User},
};

/// Boxed future returned by [`Persistence`] lookups.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, LookupError>> + 'a + Send>>;

/// Lookup contract implemented by client/user storage backends.
pub trait Persistence
where
	Self: Send + Sync,
{
	/// Loads the client registered under `id`.
	fn lookup_client<'a>(&'a self, id: &'a ClientId) -> StoreFuture<'a, Client>;

	/// Loads the resource owner registered under `username`.
	fn lookup_user<'a>(&'a self, username: &'a str) -> StoreFuture<'a, User>;
}

/// Error type produced by [`Persistence`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum LookupError {
	/// No record exists for the key.
	#[error("No {record} is registered under `{key}`.")]
	NotFound {
		/// Record kind (`client` or `user`).
		record: &'static str,
		/// Lookup key.
		key: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
impl LookupError {
	/// Shorthand for a missing client.
	pub fn client_not_found(id: &ClientId) -> Self {
		Self::NotFound { record: "client", key: id.to_string() }
	}

	/// Shorthand for a missing user.
	pub fn user_not_found(username: &str) -> Self {
		Self::NotFound { record: "user", key: username.to_owned() }
	}

	/// Returns true for [`LookupError::NotFound`].
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}
