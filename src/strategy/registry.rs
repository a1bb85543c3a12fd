//! Immutable identifier → handler maps built once during configuration.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	obs,
	store::Persistence,
	strategy::{GrantTypeHandler, Registration, ResponseTypeHandler, Strategy},
};

const GRANT_AXIS: &str = "grant_type";
const RESPONSE_AXIS: &str = "response_type";

/// Read-only strategy registry shared by every request.
#[derive(Clone, Default)]
pub struct Registry {
	grant_types: HashMap<String, Arc<dyn GrantTypeHandler>>,
	response_types: HashMap<String, Arc<dyn ResponseTypeHandler>>,
}
impl Registry {
	/// Starts a builder whose strategies receive `persistence`.
	pub fn builder(persistence: Arc<dyn Persistence>) -> RegistryBuilder {
		RegistryBuilder::new(persistence)
	}

	/// Handler registered for a `grant_type` value.
	pub fn grant_type(&self, identifier: &str) -> Option<&Arc<dyn GrantTypeHandler>> {
		self.grant_types.get(identifier)
	}

	/// Handler registered for a `response_type` value.
	pub fn response_type(&self, identifier: &str) -> Option<&Arc<dyn ResponseTypeHandler>> {
		self.response_types.get(identifier)
	}

	/// Returns the stored key matching `identifier`, for use as a bounded label.
	pub fn grant_identifier(&self, identifier: &str) -> Option<&str> {
		self.grant_types.get_key_value(identifier).map(|(key, _)| key.as_str())
	}

	/// Registered grant identifiers in sorted order.
	pub fn grant_types(&self) -> Vec<&str> {
		sorted_keys(&self.grant_types)
	}

	/// Registered response identifiers in sorted order.
	pub fn response_types(&self) -> Vec<&str> {
		sorted_keys(&self.response_types)
	}
}
impl Debug for Registry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Registry")
			.field("grant_types", &self.grant_types())
			.field("response_types", &self.response_types())
			.finish()
	}
}

/// Builder for [`Registry`] values.
pub struct RegistryBuilder {
	persistence: Arc<dyn Persistence>,
	grant_types: Vec<Registration<dyn GrantTypeHandler>>,
	response_types: Vec<Registration<dyn ResponseTypeHandler>>,
}
impl RegistryBuilder {
	/// Creates an empty builder.
	pub fn new(persistence: Arc<dyn Persistence>) -> Self {
		Self { persistence, grant_types: Vec::new(), response_types: Vec::new() }
	}

	/// Collects whatever handlers `strategy` contributes.
	pub fn register<S>(mut self, strategy: &S) -> Self
	where
		S: ?Sized + Strategy,
	{
		if let Some(registration) = strategy.response_type(&self.persistence) {
			self.response_types.push(registration);
		}
		if let Some(registration) = strategy.grant_type(&self.persistence) {
			self.grant_types.push(registration);
		}

		self
	}

	/// Validates identifiers and freezes the maps.
	///
	/// A later registration under the same identifier replaces an earlier one.
	pub fn build(self) -> Result<Registry, ConfigError> {
		if self.grant_types.is_empty() {
			return Err(ConfigError::NoGrantTypes);
		}

		Ok(Registry {
			grant_types: collect(GRANT_AXIS, self.grant_types)?,
			response_types: collect(RESPONSE_AXIS, self.response_types)?,
		})
	}
}
impl Debug for RegistryBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RegistryBuilder")
			.field("grant_types", &self.grant_types)
			.field("response_types", &self.response_types)
			.finish()
	}
}

fn collect<H>(
	axis: &'static str,
	registrations: Vec<Registration<H>>,
) -> Result<HashMap<String, Arc<H>>, ConfigError>
where
	H: ?Sized,
{
	let mut map = HashMap::with_capacity(registrations.len());

	for Registration { identifier, handler } in registrations {
		validate_identifier(axis, &identifier)?;

		if let Some(_replaced) = map.insert(identifier.clone(), handler) {
			obs::log_replaced_registration(axis, &identifier);
		}
	}

	Ok(map)
}

fn validate_identifier(axis: &'static str, identifier: &str) -> Result<(), ConfigError> {
	if identifier.is_empty() {
		return Err(ConfigError::EmptyIdentifier { axis });
	}
	if identifier.chars().any(char::is_whitespace) {
		return Err(ConfigError::IdentifierContainsWhitespace {
			axis,
			identifier: identifier.to_owned(),
		});
	}

	Ok(())
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&str> {
	let mut keys = map.keys().map(String::as_str).collect::<Vec<_>>();

	keys.sort_unstable();

	keys
}
