//! Client authentication for the token endpoint (RFC 6749 §2.3.1).

// self
use crate::{
	_prelude::*,
	auth::{Client, ClientId, Secret},
	oauth::OAuth2Error,
	obs,
	request::TokenRequest,
	store::Persistence,
};

/// Validates client credentials against the persistence port.
#[derive(Clone)]
pub struct ClientAuthenticator {
	persistence: Arc<dyn Persistence>,
}
impl ClientAuthenticator {
	/// Creates an authenticator backed by `persistence`.
	pub fn new(persistence: Arc<dyn Persistence>) -> Self {
		Self { persistence }
	}

	/// Authenticates the client behind `request`.
	///
	/// Missing or undecodable credentials yield `invalid_request`; an unknown client or a
	/// secret mismatch yields `invalid_client`; any other lookup failure yields
	/// `server_error`.
	pub async fn authenticate(&self, request: &TokenRequest) -> Result<Client, OAuth2Error> {
		let pair = request.client_credentials()?;
		let id = ClientId::from_str(&pair.id).map_err(|_| {
			OAuth2Error::invalid_request().with_description("The client identifier is malformed.")
		})?;
		let secret = Secret::decode(&pair.secret).map_err(|_| {
			OAuth2Error::invalid_request().with_description("The client secret is malformed.")
		})?;
		let client = match self.persistence.lookup_client(&id).await {
			Ok(client) => client,
			Err(e) if e.is_not_found() => return Err(OAuth2Error::invalid_client()),
			Err(e) => {
				obs::log_internal_failure("authenticate_client", &e);

				return Err(Error::from(e).into());
			},
		};

		if client.secret != secret {
			return Err(OAuth2Error::invalid_client());
		}

		Ok(client)
	}
}
impl Debug for ClientAuthenticator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ClientAuthenticator(..)")
	}
}
