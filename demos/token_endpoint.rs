//! Drives the token endpoint in-process: registers a client and a user, then runs a
//! client-credentials request, a password request, and a rejected request.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use oauth2_issuer::{
	auth::{Client, User},
	grants::{ClientCredentials, ResourceOwnerPasswordCredentials},
	issuer::TokenIssuer,
	request::{TokenParams, TokenRequest},
	settings::IssuerSettings,
	store::MemoryStore,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let store = MemoryStore::default();
	let client = Client::new("demo client", "https://example.test/oauth2/callback")?;

	store.register_client(client.clone());
	store.register_user(User::new("foobario", "password"));

	let issuer = TokenIssuer::builder(Arc::new(store))
		.register(&ClientCredentials)
		.register(&ResourceOwnerPasswordCredentials)
		.settings(IssuerSettings::from_json(r#"{"unknown_user":"access_denied"}"#)?)
		.build()?;

	println!("Registered grant types: {:?}", issuer.registry().grant_types());

	for body in [
		"grant_type=client_credentials&scope=basic+email",
		"grant_type=password&username=foobario&password=password&scope=basic",
		"grant_type=password&username=foobario&password=wrong",
		"grant_type=implicit",
	] {
		let request = TokenRequest::new(TokenParams::from_form(body))
			.with_basic_auth(client.id, client.secret.encode());
		let response = issuer.token_endpoint(&request).await;

		println!("{body}\n  -> {} {}", response.status, serde_json::to_string(&response.body)?);
	}

	Ok(())
}
