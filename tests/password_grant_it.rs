// std
use std::sync::Arc;
// self
use oauth2_issuer::{
	auth::{Client, User},
	grants::{ClientCredentials, ResourceOwnerPasswordCredentials},
	issuer::TokenIssuer,
	oauth::ErrorKind,
	request::{TokenParams, TokenRequest},
	settings::{IssuerSettings, UnknownUserPolicy},
	store::MemoryStore,
};

fn issuer_with(settings: IssuerSettings) -> (TokenIssuer, Client) {
	let store = MemoryStore::default();
	let client = Client::new("3rd party client", "https://example.test/oauth2/callback")
		.expect("Client fixture should generate.");

	store.register_client(client.clone());
	store.register_user(User::new("foobario", "password"));

	let issuer = TokenIssuer::builder(Arc::new(store))
		.register(&ClientCredentials)
		.register(&ResourceOwnerPasswordCredentials)
		.settings(settings)
		.build()
		.expect("Issuer fixture should build.");

	(issuer, client)
}

fn password_request(client: &Client, body: &str) -> TokenRequest {
	TokenRequest::new(TokenParams::from_form(body)).with_basic_auth(client.id, client.secret.encode())
}

#[tokio::test]
async fn correct_credentials_issue_user_token() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let token = issuer
		.issue(&password_request(
			&client,
			"grant_type=password&username=foobario&password=password&scope=basic",
		))
		.await
		.expect("Password grant should issue.");

	assert_eq!(token.client.id, client.id);
	assert_eq!(token.user.as_ref().map(|user| user.username.as_str()), Some("foobario"));
	assert_eq!(token.scopes.as_slice(), ["basic"]);
}

#[tokio::test]
async fn wrong_password_is_access_denied() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let response = issuer
		.token_endpoint(&password_request(
			&client,
			"grant_type=password&username=foobario&password=INVALID",
		))
		.await;
	let json = serde_json::to_value(&response.body).expect("Error body should serialize.");

	assert_eq!(response.status, 401);
	assert_eq!(json["error"], "access_denied");
}

#[tokio::test]
async fn missing_password_is_invalid_request() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let response = issuer
		.token_endpoint(&password_request(&client, "grant_type=password&username=foobario"))
		.await;
	let json = serde_json::to_value(&response.body).expect("Error body should serialize.");

	assert_eq!(response.status, 400);
	assert_eq!(json["error"], "invalid_request");
}

#[tokio::test]
async fn empty_username_is_invalid_request() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let err = issuer
		.issue(&password_request(&client, "grant_type=password&username=&password=password"))
		.await
		.expect_err("Empty usernames must fail.");

	assert_eq!(err.kind, ErrorKind::InvalidRequest);
}

#[tokio::test]
async fn unknown_user_maps_to_server_error_by_default() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let response = issuer
		.token_endpoint(&password_request(
			&client,
			"grant_type=password&username=nobody&password=password",
		))
		.await;
	let json = serde_json::to_string(&response.body).expect("Error body should serialize.");

	assert_eq!(response.status, 500);
	assert!(json.contains("server_error"));
	assert!(!json.contains("nobody"));
}

#[tokio::test]
async fn unknown_user_can_be_reported_as_access_denied() {
	let (issuer, client) = issuer_with(IssuerSettings {
		unknown_user: UnknownUserPolicy::AccessDenied,
		..Default::default()
	});
	let err = issuer
		.issue(&password_request(
			&client,
			"grant_type=password&username=nobody&password=password",
		))
		.await
		.expect_err("Unknown users must fail.");

	assert_eq!(err.kind, ErrorKind::AccessDenied);
	assert_eq!(err.status(), 401);
}

#[tokio::test]
async fn client_authentication_still_applies() {
	let (issuer, client) = issuer_with(IssuerSettings::default());
	let request = TokenRequest::new(TokenParams::from_form(
		"grant_type=password&username=foobario&password=password",
	))
	.with_basic_auth(client.id, "d3Jvbmc");
	let err = issuer.issue(&request).await.expect_err("Bad client credentials must fail.");

	assert_eq!(err.kind, ErrorKind::InvalidClient);
}
