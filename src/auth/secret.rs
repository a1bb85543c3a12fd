//! Shared-credential bytes that only ever leave the process in encoded form.

// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError};
// self
use crate::{
	_prelude::*,
	security::{self, EncodingError},
};

/// Opaque shared credential (client secrets, issued token values).
///
/// Equality is constant-time, formatters redact the value, and the serialized form is
/// URL-safe base64 without padding.
#[derive(Clone, Default)]
pub struct Secret(Vec<u8>);
impl Secret {
	/// Wraps raw secret bytes.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	/// Decodes the text form produced by [`Secret::encode`].
	pub fn decode(text: &str) -> Result<Self, EncodingError> {
		security::decode_text(text).map(Self)
	}

	/// Returns the URL-safe, unpadded base64 text form. Callers must avoid logging it.
	pub fn encode(&self) -> String {
		security::encode_text(&self.0)
	}

	/// Returns the raw bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}

	/// Number of raw bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the secret holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl PartialEq for Secret {
	fn eq(&self, other: &Self) -> bool {
		security::constant_time_eq(&self.0, &other.0)
	}
}
impl Eq for Secret {}
impl From<Vec<u8>> for Secret {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}
impl FromStr for Secret {
	type Err = EncodingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::decode(s)
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
impl Serialize for Secret {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.encode())
	}
}
impl<'de> Deserialize<'de> for Secret {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let text = String::deserialize(deserializer)?;

		Secret::decode(&text).map_err(DeError::custom)
	}
}
