//! Resource Owner Password Credentials grant (RFC 6749 §4.3).

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Password},
	grants::{self, GrantType},
	oauth::OAuth2Error,
	obs,
	settings::UnknownUserPolicy,
	store::Persistence,
	strategy::{GrantContext, GrantFuture, GrantTypeHandler, Registration, Strategy},
};

/// Strategy registering the `password` grant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceOwnerPasswordCredentials;
impl Strategy for ResourceOwnerPasswordCredentials {
	fn grant_type(
		&self,
		persistence: &Arc<dyn Persistence>,
	) -> Option<Registration<dyn GrantTypeHandler>> {
		let handler: Arc<dyn GrantTypeHandler> = Arc::new(PasswordGrant::new(persistence.clone()));

		Some(Registration::new(GrantType::Password.as_str(), handler))
	}
}

/// Authenticates the resource owner by username and password, then issues a token bound to
/// both the client and the user.
#[derive(Clone)]
pub struct PasswordGrant {
	users: Arc<dyn Persistence>,
}
impl PasswordGrant {
	/// Creates a grant handler that looks users up in `users`.
	pub fn new(users: Arc<dyn Persistence>) -> Self {
		Self { users }
	}
}
impl Debug for PasswordGrant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("PasswordGrant(..)")
	}
}
impl GrantTypeHandler for PasswordGrant {
	fn issue_token<'a>(&'a self, ctx: GrantContext<'a>) -> GrantFuture<'a> {
		Box::pin(async move {
			let username = ctx.params.unique_non_empty("username")?;
			let password = ctx.params.unique_non_empty("password")?;
			let scopes = grants::requested_scopes(ctx.params, ctx.settings)?;
			let (Some(username), Some(password)) = (username, password) else {
				return Err(OAuth2Error::invalid_request()
					.with_description("The username and password parameters are required."));
			};
			let user = match self.users.lookup_user(username).await {
				Ok(user) => user,
				Err(e)
					if e.is_not_found()
						&& ctx.settings.unknown_user == UnknownUserPolicy::AccessDenied =>
					return Err(deny_unknown_user(password)),
				Err(e) => {
					obs::log_internal_failure("password_user_lookup", &e);

					return Err(Error::from(e).into());
				},
			};

			if !user.password.verify(password.as_bytes()) {
				return Err(OAuth2Error::access_denied());
			}

			AccessToken::new_with(ctx.entropy, ctx.client.clone(), Some(user), scopes).map_err(|e| {
				obs::log_internal_failure("password", &e);

				OAuth2Error::from(e)
			})
		})
	}
}

/// Rejects an unknown user after the same constant-time comparison a known user gets.
fn deny_unknown_user(candidate: &str) -> OAuth2Error {
	let decoy = Password::new(vec![0_u8; candidate.len()]);

	std::hint::black_box(decoy.verify(candidate.as_bytes()));

	OAuth2Error::access_denied()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::{Client, ClientId, User},
		oauth::ErrorKind,
		request::TokenParams,
		security::OsEntropy,
		settings::IssuerSettings,
		store::{LookupError, MemoryStore, StoreFuture},
	};

	struct BrokenStore;
	impl Persistence for BrokenStore {
		fn lookup_client<'a>(&'a self, _id: &'a ClientId) -> StoreFuture<'a, Client> {
			Box::pin(async { Err(LookupError::Backend { message: "connection reset".into() }) })
		}

		fn lookup_user<'a>(&'a self, _username: &'a str) -> StoreFuture<'a, User> {
			Box::pin(async { Err(LookupError::Backend { message: "connection reset".into() }) })
		}
	}

	async fn run(params: TokenParams, settings: IssuerSettings) -> Result<AccessToken, OAuth2Error> {
		let store = MemoryStore::default();

		store.register_user(User::new("foobario", "password"));

		let grant = PasswordGrant::new(Arc::new(store));
		let client =
			Client::new("app", "https://example.test/cb").expect("Client fixture should generate.");

		grant
			.issue_token(GrantContext {
				client: &client,
				params: &params,
				entropy: &OsEntropy,
				settings: &settings,
			})
			.await
	}

	fn params(username: &str, password: &str) -> TokenParams {
		TokenParams::default()
			.with("username", username)
			.with("password", password)
			.with("scope", "basic")
	}

	#[tokio::test]
	async fn correct_credentials_issue_user_token() {
		let token = run(params("foobario", "password"), IssuerSettings::default())
			.await
			.expect("Correct credentials should issue.");

		assert_eq!(token.user.as_ref().map(|user| user.username.as_str()), Some("foobario"));
		assert_eq!(token.scopes.as_slice(), ["basic"]);
	}

	#[tokio::test]
	async fn wrong_password_is_access_denied() {
		let err = run(params("foobario", "wrong"), IssuerSettings::default())
			.await
			.expect_err("Wrong password must fail.");

		assert_eq!(err.kind, ErrorKind::AccessDenied);
		assert_eq!(err.status(), 401);
	}

	#[tokio::test]
	async fn missing_or_empty_fields_are_invalid_requests() {
		let missing = TokenParams::default().with("username", "foobario");
		let empty = params("", "password");

		for params in [missing, empty] {
			let err = run(params, IssuerSettings::default())
				.await
				.expect_err("Incomplete resource-owner credentials must fail.");

			assert_eq!(err.kind, ErrorKind::InvalidRequest);
			assert_eq!(err.status(), 400);
		}
	}

	#[tokio::test]
	async fn unknown_user_follows_policy() {
		let reference = run(params("nobody", "password"), IssuerSettings::default())
			.await
			.expect_err("Unknown users must fail.");
		let strict = run(
			params("nobody", "password"),
			IssuerSettings { unknown_user: UnknownUserPolicy::AccessDenied, ..Default::default() },
		)
		.await
		.expect_err("Unknown users must fail.");

		assert_eq!(reference.kind, ErrorKind::ServerError);
		assert_eq!(strict.kind, ErrorKind::AccessDenied);
	}

	#[tokio::test]
	async fn backend_failures_are_server_errors_under_every_policy() {
		let grant = PasswordGrant::new(Arc::new(BrokenStore));
		let client =
			Client::new("app", "https://example.test/cb").expect("Client fixture should generate.");
		let params = params("foobario", "password");

		for unknown_user in [UnknownUserPolicy::ServerError, UnknownUserPolicy::AccessDenied] {
			let settings = IssuerSettings { unknown_user, ..Default::default() };
			let err = grant
				.issue_token(GrantContext {
					client: &client,
					params: &params,
					entropy: &OsEntropy,
					settings: &settings,
				})
				.await
				.expect_err("Backend failures must fail.");

			assert_eq!(err, OAuth2Error::server_error(), "Unexpected error under {unknown_user:?}.");
		}
	}

	#[test]
	fn unknown_user_rejection_matches_wrong_password() {
		assert_eq!(deny_unknown_user("password"), OAuth2Error::access_denied());
		assert_eq!(deny_unknown_user(""), OAuth2Error::access_denied());
	}
}
