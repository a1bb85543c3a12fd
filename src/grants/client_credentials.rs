//! Client Credentials grant (RFC 6749 §4.4).

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	grants::{self, GrantType},
	oauth::OAuth2Error,
	obs,
	store::Persistence,
	strategy::{GrantContext, GrantFuture, GrantTypeHandler, Registration, Strategy},
};

/// Strategy registering the `client_credentials` grant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientCredentials;
impl Strategy for ClientCredentials {
	fn grant_type(
		&self,
		_persistence: &Arc<dyn Persistence>,
	) -> Option<Registration<dyn GrantTypeHandler>> {
		let handler: Arc<dyn GrantTypeHandler> = Arc::new(ClientCredentialsGrant);

		Some(Registration::new(GrantType::ClientCredentials.as_str(), handler))
	}
}

/// Issues client-only tokens; authentication already proved everything this grant needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientCredentialsGrant;
impl GrantTypeHandler for ClientCredentialsGrant {
	fn issue_token<'a>(&'a self, ctx: GrantContext<'a>) -> GrantFuture<'a> {
		Box::pin(async move {
			let scopes = grants::requested_scopes(ctx.params, ctx.settings)?;

			AccessToken::new_with(ctx.entropy, ctx.client.clone(), None, scopes).map_err(|e| {
				obs::log_internal_failure("client_credentials", &e);

				OAuth2Error::from(e)
			})
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::Client,
		request::TokenParams,
		security::{EntropyError, EntropySource, OsEntropy},
		settings::IssuerSettings,
	};

	struct DryEntropy;
	impl EntropySource for DryEntropy {
		fn fill(&self, _dest: &mut [u8]) -> Result<usize, EntropyError> {
			Ok(0)
		}
	}

	fn client() -> Client {
		Client::new("svc", "https://example.test/cb").expect("Client fixture should generate.")
	}

	#[tokio::test]
	async fn issues_client_only_token_with_requested_scopes() {
		let client = client();
		let params = TokenParams::default().with("scope", "basic email");
		let settings = IssuerSettings::default();
		let token = ClientCredentialsGrant
			.issue_token(GrantContext {
				client: &client,
				params: &params,
				entropy: &OsEntropy,
				settings: &settings,
			})
			.await
			.expect("Client credentials grant should issue.");

		assert!(token.user.is_none());
		assert_eq!(token.client.id, client.id);
		assert_eq!(token.scopes.as_slice(), ["basic", "email"]);
	}

	#[tokio::test]
	async fn entropy_failure_is_server_error() {
		let client = client();
		let params = TokenParams::default();
		let settings = IssuerSettings::default();
		let err = ClientCredentialsGrant
			.issue_token(GrantContext {
				client: &client,
				params: &params,
				entropy: &DryEntropy,
				settings: &settings,
			})
			.await
			.expect_err("A dry entropy source must fail issuance.");

		assert_eq!(err, OAuth2Error::server_error());
	}
}
