//! Transport-agnostic token request model.
//!
//! The HTTP layer hands over the raw `Authorization` header (if any) and the decoded form
//! parameters; everything protocol-specific happens from here on.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::form_urlencoded;
// self
use crate::{_prelude::*, oauth::OAuth2Error};

/// Ordered `application/x-www-form-urlencoded` parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenParams(Vec<(String, String)>);
impl TokenParams {
	/// Parses a form-encoded request body.
	pub fn from_form(body: &str) -> Self {
		Self(form_urlencoded::parse(body.as_bytes()).into_owned().collect())
	}

	/// Appends a parameter.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.push((name.into(), value.into()));

		self
	}

	/// Returns the first value for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Returns the value for `name`, rejecting a parameter sent more than once (RFC 6749 §3.2).
	pub fn unique(&self, name: &str) -> Result<Option<&str>, OAuth2Error> {
		let mut values = self.0.iter().filter(|(key, _)| key == name).map(|(_, value)| value.as_str());
		let first = values.next();

		if values.next().is_some() {
			return Err(OAuth2Error::invalid_request()
				.with_description(format!("The `{name}` parameter must not be repeated.")));
		}

		Ok(first)
	}

	/// Like [`TokenParams::unique`] but treats an empty value as absent.
	pub fn unique_non_empty(&self, name: &str) -> Result<Option<&str>, OAuth2Error> {
		Ok(self.unique(name)?.filter(|value| !value.is_empty()))
	}

	/// Iterator over all pairs in request order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}
}
impl<K, V> FromIterator<(K, V)> for TokenParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

/// Inbound token endpoint request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
	/// Raw `Authorization` header value, if one was sent.
	pub authorization: Option<String>,
	/// Form parameters.
	pub params: TokenParams,
}
impl TokenRequest {
	/// Creates a request from form parameters alone.
	pub fn new(params: TokenParams) -> Self {
		Self { authorization: None, params }
	}

	/// Attaches a raw `Authorization` header value.
	pub fn with_authorization(mut self, header: impl Into<String>) -> Self {
		self.authorization = Some(header.into());

		self
	}

	/// Attaches an HTTP Basic `Authorization` header built from `id` and `secret`.
	pub fn with_basic_auth(self, id: impl Display, secret: impl Display) -> Self {
		let header = format!("Basic {}", STANDARD.encode(format!("{id}:{secret}")));

		self.with_authorization(header)
	}

	/// Extracts the client identifier and secret text.
	///
	/// A non-empty `Authorization` header is authoritative: when present it must parse as HTTP
	/// Basic and the form fields are ignored. Either source must yield both values.
	pub fn client_credentials(&self) -> Result<ClientCredentialPair, OAuth2Error> {
		let pair = match self.authorization.as_deref().filter(|header| !header.is_empty()) {
			Some(header) => parse_basic(header).ok_or_else(|| {
				OAuth2Error::invalid_request()
					.with_description("The Authorization header is not valid HTTP Basic.")
			})?,
			None => ClientCredentialPair {
				id: self.params.unique("client_id")?.unwrap_or_default().to_owned(),
				secret: self.params.unique("client_secret")?.unwrap_or_default().to_owned(),
			},
		};

		if pair.id.is_empty() || pair.secret.is_empty() {
			return Err(OAuth2Error::invalid_request()
				.with_description("Client identifier and secret are both required."));
		}

		Ok(pair)
	}
}
impl Debug for TokenRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let names = self.params.iter().map(|(key, _)| key).collect::<Vec<_>>();

		f.debug_struct("TokenRequest")
			.field("authorization", &self.authorization.as_ref().map(|_| "<redacted>"))
			.field("params", &names)
			.finish()
	}
}

/// Client identifier and secret text as supplied by the caller, not yet decoded.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentialPair {
	/// Identifier text.
	pub id: String,
	/// Secret text; callers must avoid logging it.
	pub secret: String,
}
impl Debug for ClientCredentialPair {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientCredentialPair")
			.field("id", &self.id)
			.field("secret", &"<redacted>")
			.finish()
	}
}

fn parse_basic(header: &str) -> Option<ClientCredentialPair> {
	let (scheme, payload) = header.split_once(' ')?;

	if !scheme.eq_ignore_ascii_case("basic") {
		return None;
	}

	let decoded = STANDARD.decode(payload.trim()).ok()?;
	let text = String::from_utf8(decoded).ok()?;
	let (id, secret) = text.split_once(':')?;

	Some(ClientCredentialPair { id: id.to_owned(), secret: secret.to_owned() })
}
