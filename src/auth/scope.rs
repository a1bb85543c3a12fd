//! Scope lists carried verbatim from the request onto issued tokens.

// std
use std::slice::Iter;
// self
use crate::_prelude::*;

/// Ordered list of requested scopes.
///
/// No normalization happens here: entries keep their request order, duplicates survive, and
/// an empty entry is a valid element. Grant strategies decide what to accept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Wraps any sequence of scope strings as-is.
	pub fn new<I, S>(scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(scopes.into_iter().map(Into::into).collect())
	}

	/// Splits a `scope` parameter on single spaces, exactly as received.
	///
	/// `""` yields one empty entry and repeated spaces yield empty entries between them.
	pub fn parse(raw: &str) -> Self {
		Self::new(raw.split(' '))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if any entry equals `scope`.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over entries.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Returns the entries as a slice.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0.join(" "))
	}
}
impl From<Vec<String>> for ScopeList {
	fn from(value: Vec<String>) -> Self {
		Self(value)
	}
}
impl<S> FromIterator<S> for ScopeList
where
	S: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = Iter<'a, String>;
	type Item = &'a String;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
