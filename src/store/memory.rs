//! Thread-safe in-memory [`Persistence`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::{Client, ClientId, User},
	store::{LookupError, Persistence, StoreFuture},
};

type ClientMap = Arc<RwLock<HashMap<ClientId, Client>>>;
type UserMap = Arc<RwLock<HashMap<String, User>>>;

/// Storage backend that keeps clients and users in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	clients: ClientMap,
	users: UserMap,
}
impl MemoryStore {
	/// Registers (or replaces) a client under its identifier.
	pub fn register_client(&self, client: Client) {
		self.clients.write().insert(client.id, client);
	}

	/// Registers (or replaces) a user under its username.
	pub fn register_user(&self, user: User) {
		self.users.write().insert(user.username.clone(), user);
	}

	fn client_now(map: &ClientMap, id: &ClientId) -> Result<Client, LookupError> {
		map.read().get(id).cloned().ok_or_else(|| LookupError::client_not_found(id))
	}

	fn user_now(map: &UserMap, username: &str) -> Result<User, LookupError> {
		map.read().get(username).cloned().ok_or_else(|| LookupError::user_not_found(username))
	}
}
impl Persistence for MemoryStore {
	fn lookup_client<'a>(&'a self, id: &'a ClientId) -> StoreFuture<'a, Client> {
		Box::pin(async move { Self::client_now(&self.clients, id) })
	}

	fn lookup_user<'a>(&'a self, username: &'a str) -> StoreFuture<'a, User> {
		Box::pin(async move { Self::user_now(&self.users, username) })
	}
}
