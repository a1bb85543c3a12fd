//! Registered client applications and their generated credentials.

// crates.io
use uuid::{Builder as UuidBuilder, Uuid};
// self
use crate::{
	_prelude::*,
	auth::Secret,
	security::{self, EntropyError, EntropySource, OsEntropy},
};

/// Number of random bytes backing a freshly generated client secret.
pub const CLIENT_SECRET_BYTES: usize = 128;

const CLIENT_ID_BYTES: usize = 16;

/// Error returned when a client identifier is not UUID-shaped.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Client identifier is not a valid UUID.")]
pub struct ClientIdError {
	#[source]
	source: uuid::Error,
}

/// 128-bit random client identifier rendered as a hyphenated UUID.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);
impl ClientId {
	/// Builds an identifier from 16 random bytes, stamping the v4 version bits.
	pub fn from_random_bytes(bytes: [u8; CLIENT_ID_BYTES]) -> Self {
		Self(UuidBuilder::from_random_bytes(bytes).into_uuid())
	}

	/// Draws a fresh identifier from `source`.
	pub fn generate_with(source: &dyn EntropySource) -> Result<Self, EntropyError> {
		let raw = security::generate_random_with(source, CLIENT_ID_BYTES)?;
		let mut bytes = [0_u8; CLIENT_ID_BYTES];

		bytes.copy_from_slice(&raw);

		Ok(Self::from_random_bytes(bytes))
	}

	/// Returns the underlying UUID.
	pub fn as_uuid(&self) -> &Uuid {
		&self.0
	}
}
impl From<Uuid> for ClientId {
	fn from(value: Uuid) -> Self {
		Self(value)
	}
}
impl FromStr for ClientId {
	type Err = ClientIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Uuid::parse_str(s).map(Self).map_err(|source| ClientIdError { source })
	}
}
impl Debug for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Client({})", self.0.hyphenated())
	}
}
impl Display for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0.hyphenated(), f)
	}
}

/// Client application known to the authorization server.
///
/// See RFC 6749 §1.1 and §2. Clients are created once with [`Client::new`] (or
/// [`Client::generate_credentials`] on a hand-built value) and treated as immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
	/// Unique random identifier.
	pub id: ClientId,
	/// Shared secret used for client authentication.
	pub secret: Secret,
	/// Display name.
	pub name: String,
	/// Registered redirect URI.
	pub redirect_uri: String,
	/// Whether the client can keep its secret confidential (RFC 6749 §2.1).
	pub confidential: bool,
	/// Whether the client is operated by the server owner.
	pub internal: bool,
}
impl Client {
	/// Creates a client with freshly generated credentials from OS entropy.
	pub fn new(name: impl Into<String>, redirect_uri: impl Into<String>) -> Result<Self, EntropyError> {
		Self::new_with(&OsEntropy, name, redirect_uri)
	}

	/// Creates a client with freshly generated credentials from `source`.
	pub fn new_with(
		source: &dyn EntropySource,
		name: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Result<Self, EntropyError> {
		let (id, secret) = generate_credentials(source)?;

		Ok(Self {
			id,
			secret,
			name: name.into(),
			redirect_uri: redirect_uri.into(),
			confidential: false,
			internal: false,
		})
	}

	/// Marks the client as confidential.
	pub fn confidential(mut self, confidential: bool) -> Self {
		self.confidential = confidential;

		self
	}

	/// Marks the client as internal.
	pub fn internal(mut self, internal: bool) -> Self {
		self.internal = internal;

		self
	}

	/// Replaces the identifier and secret with fresh values from OS entropy.
	pub fn generate_credentials(&mut self) -> Result<(), EntropyError> {
		self.generate_credentials_with(&OsEntropy)
	}

	/// Replaces the identifier and secret with fresh values from `source`.
	///
	/// Both values are drawn before either field is written, so a failure leaves the client
	/// untouched.
	pub fn generate_credentials_with(&mut self, source: &dyn EntropySource) -> Result<(), EntropyError> {
		let (id, secret) = generate_credentials(source)?;

		self.id = id;
		self.secret = secret;

		Ok(())
	}
}

fn generate_credentials(source: &dyn EntropySource) -> Result<(ClientId, Secret), EntropyError> {
	let id = ClientId::generate_with(source)?;
	let secret = Secret::new(security::generate_random_with(source, CLIENT_SECRET_BYTES)?);

	Ok((id, secret))
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;

	/// Serves the first call, then fails every subsequent one.
	struct OneShotEntropy(AtomicUsize);
	impl EntropySource for OneShotEntropy {
		fn fill(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
			if self.0.fetch_add(1, Ordering::SeqCst) == 0 {
				OsEntropy.fill(dest)
			} else {
				Ok(0)
			}
		}
	}

	#[test]
	fn generated_credentials_are_populated_and_distinct() {
		let a = Client::new("Test Client", "https://example.test/oauth2/callback")
			.expect("Client credentials should generate.");
		let b = Client::new("Test Client", "https://example.test/oauth2/callback")
			.expect("Client credentials should generate.");

		assert_eq!(a.secret.len(), CLIENT_SECRET_BYTES);
		assert_ne!(a.id, b.id);
		assert_ne!(a.secret, b.secret);
		assert_eq!(a.id.as_uuid().get_version_num(), 4);
	}

	#[test]
	fn failed_generation_leaves_client_untouched() {
		let mut client = Client::new("Test Client", "https://example.test/oauth2/callback")
			.expect("Client credentials should generate.");
		let before = client.clone();
		let err = client
			.generate_credentials_with(&OneShotEntropy(AtomicUsize::new(0)))
			.expect_err("Second draw fails, so rotation must fail.");

		assert!(matches!(err, EntropyError::ShortFill { .. }));
		assert_eq!(client, before);
	}

	#[test]
	fn identifier_text_form_round_trips() {
		let id = ClientId::generate_with(&OsEntropy).expect("Identifier should generate.");
		let parsed = ClientId::from_str(&id.to_string()).expect("Identifier text should parse.");

		assert_eq!(parsed, id);
		assert!(ClientId::from_str("not-a-uuid").is_err());
		assert!(ClientId::from_str("").is_err());
	}
}
