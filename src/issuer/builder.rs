// self
use crate::{
	_prelude::*,
	authenticator::ClientAuthenticator,
	issuer::TokenIssuer,
	security::{EntropySource, OsEntropy},
	settings::IssuerSettings,
	store::Persistence,
	strategy::{RegistryBuilder, Strategy},
};

/// Builder for [`TokenIssuer`] values.
///
/// Registration happens here, once, before any request is served; [`TokenIssuerBuilder::build`]
/// validates the registry and freezes it.
pub struct TokenIssuerBuilder {
	persistence: Arc<dyn Persistence>,
	registry: RegistryBuilder,
	entropy: Arc<dyn EntropySource>,
	settings: IssuerSettings,
}
impl TokenIssuerBuilder {
	/// Creates a builder with OS entropy and default settings.
	pub fn new(persistence: Arc<dyn Persistence>) -> Self {
		Self {
			registry: RegistryBuilder::new(persistence.clone()),
			persistence,
			entropy: Arc::new(OsEntropy),
			settings: IssuerSettings::default(),
		}
	}

	/// Registers whatever handlers `strategy` contributes.
	pub fn register<S>(mut self, strategy: &S) -> Self
	where
		S: ?Sized + Strategy,
	{
		self.registry = self.registry.register(strategy);

		self
	}

	/// Replaces the entropy source used to mint token values.
	pub fn entropy(mut self, source: Arc<dyn EntropySource>) -> Self {
		self.entropy = source;

		self
	}

	/// Replaces the issuer settings.
	pub fn settings(mut self, settings: IssuerSettings) -> Self {
		self.settings = settings;

		self
	}

	/// Validates the registrations and produces an immutable issuer.
	pub fn build(self) -> Result<TokenIssuer> {
		let registry = self.registry.build()?;

		Ok(TokenIssuer {
			authenticator: ClientAuthenticator::new(self.persistence),
			registry,
			entropy: self.entropy,
			settings: self.settings,
		})
	}
}
impl Debug for TokenIssuerBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenIssuerBuilder")
			.field("registry", &self.registry)
			.field("settings", &self.settings)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		error::ConfigError,
		grants::{ClientCredentials, ResourceOwnerPasswordCredentials},
		settings::UnknownUserPolicy,
		store::MemoryStore,
	};

	#[test]
	fn build_without_grants_is_rejected() {
		let err = TokenIssuer::builder(Arc::new(MemoryStore::default()))
			.build()
			.expect_err("An issuer without grants must not build.");

		assert!(matches!(err, Error::Config(ConfigError::NoGrantTypes)));
	}

	#[test]
	fn registered_grants_and_settings_are_kept() {
		let settings =
			IssuerSettings { unknown_user: UnknownUserPolicy::AccessDenied, ..Default::default() };
		let issuer = TokenIssuer::builder(Arc::new(MemoryStore::default()))
			.register(&ResourceOwnerPasswordCredentials)
			.register(&ClientCredentials)
			.settings(settings)
			.build()
			.expect("Issuer should build.");

		assert_eq!(issuer.registry().grant_types(), ["client_credentials", "password"]);
		assert!(issuer.registry().response_types().is_empty());
		assert_eq!(issuer.settings(), &settings);
	}
}
