//! URL-safe, unpadded base64 text form for secrets and issued tokens.

// crates.io
use base64::{DecodeError, Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::_prelude::*;

/// Error returned when secret text cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EncodingError {
	/// The text is not valid URL-safe base64 without padding.
	#[error("Secret text is not valid unpadded URL-safe base64.")]
	Base64 {
		/// Underlying decoder failure.
		#[source]
		source: DecodeError,
	},
}

/// Encodes raw bytes as URL-safe base64 without padding.
pub fn encode_text(bytes: &[u8]) -> String {
	URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes text produced by [`encode_text`] back into raw bytes.
pub fn decode_text(text: &str) -> Result<Vec<u8>, EncodingError> {
	URL_SAFE_NO_PAD.decode(text).map_err(|source| EncodingError::Base64 { source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::security::generate_random;

	#[test]
	fn random_payloads_survive_text_form() {
		for len in [0_usize, 1, 2, 3, 31, 128, 512] {
			let raw = generate_random(len).expect("OS entropy should be available in tests.");
			let text = encode_text(&raw);

			assert!(!text.contains('='), "Encoded text must not carry padding.");
			assert!(!text.contains('+') && !text.contains('/'), "Encoded text must be URL-safe.");
			assert_eq!(decode_text(&text).expect("Encoded text should decode."), raw);
		}
	}

	#[test]
	fn malformed_text_is_rejected() {
		assert!(decode_text("not base64!").is_err());
		assert!(decode_text("YWJj=").is_err(), "Padding is not accepted.");
		assert!(decode_text("a+b/").is_err(), "Standard alphabet is not accepted.");
		assert!(decode_text("A").is_err(), "Truncated quantum is not accepted.");
	}
}
