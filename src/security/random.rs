//! Cryptographically secure random bytes behind a pluggable entropy source.

// crates.io
use rand::{TryRngCore, rngs::OsRng};
// self
use crate::_prelude::*;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure to obtain the requested amount of randomness.
#[derive(Debug, ThisError)]
pub enum EntropyError {
	/// The underlying source reported an error.
	#[error("Entropy source failed.")]
	Source {
		/// Source-specific failure.
		#[source]
		source: BoxError,
	},
	/// The source returned fewer bytes than requested.
	#[error("Entropy source filled {filled} of {requested} requested bytes.")]
	ShortFill {
		/// Number of bytes requested by the caller.
		requested: usize,
		/// Number of bytes the source reported as written.
		filled: usize,
	},
}
impl EntropyError {
	/// Wraps a source-specific failure.
	pub fn source_failure(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Source { source: Box::new(src) }
	}
}

/// Source of cryptographically secure randomness.
///
/// Implementations are shared across concurrently handled requests and must be safe to call
/// from many threads at once.
pub trait EntropySource
where
	Self: Send + Sync,
{
	/// Fills `dest` and returns how many bytes were written.
	fn fill(&self, dest: &mut [u8]) -> Result<usize, EntropyError>;
}

/// Operating-system entropy via [`OsRng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;
impl EntropySource for OsEntropy {
	fn fill(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
		OsRng.try_fill_bytes(dest).map_err(EntropyError::source_failure)?;

		Ok(dest.len())
	}
}

/// Returns exactly `n` random bytes from the operating system.
pub fn generate_random(n: usize) -> Result<Vec<u8>, EntropyError> {
	generate_random_with(&OsEntropy, n)
}

/// Returns exactly `n` random bytes from `source`.
pub fn generate_random_with(source: &dyn EntropySource, n: usize) -> Result<Vec<u8>, EntropyError> {
	let mut buf = vec![0_u8; n];
	let filled = source.fill(&mut buf)?;

	if filled != n {
		return Err(EntropyError::ShortFill { requested: n, filled });
	}

	Ok(buf)
}

#[cfg(test)]
mod tests {
	// std
	use std::io::Error as IoError;
	// self
	use super::*;

	struct HalfEntropy;
	impl EntropySource for HalfEntropy {
		fn fill(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
			Ok(dest.len() / 2)
		}
	}

	struct BrokenEntropy;
	impl EntropySource for BrokenEntropy {
		fn fill(&self, _dest: &mut [u8]) -> Result<usize, EntropyError> {
			Err(EntropyError::source_failure(IoError::other("device unavailable")))
		}
	}

	#[test]
	fn generates_requested_length() {
		for n in [0_usize, 1, 16, 128, 256] {
			let bytes = generate_random(n).expect("OS entropy should be available in tests.");

			assert_eq!(bytes.len(), n);
		}
	}

	#[test]
	fn consecutive_draws_differ() {
		let a = generate_random(32).expect("First draw should succeed.");
		let b = generate_random(32).expect("Second draw should succeed.");

		assert_ne!(a, b);
	}

	#[test]
	fn short_fill_is_an_error() {
		let err = generate_random_with(&HalfEntropy, 10).expect_err("Short fills must fail.");

		assert!(matches!(err, EntropyError::ShortFill { requested: 10, filled: 5 }));
	}

	#[test]
	fn source_failure_propagates() {
		let err = generate_random_with(&BrokenEntropy, 8).expect_err("Source errors must fail.");

		assert!(matches!(err, EntropyError::Source { .. }));
		assert!(StdError::source(&err).is_some());
	}
}
