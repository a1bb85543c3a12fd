//! Constant-time equality for secret material.

// crates.io
use subtle::ConstantTimeEq;

/// Compares two byte slices without leaking where (or whether) their contents differ.
///
/// A length mismatch returns `false` immediately; lengths are public. Equal-length inputs are
/// folded across their full length before the result is inspected.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	a.ct_eq(b).into()
}
