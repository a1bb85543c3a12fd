//! Core entities: clients, resource owners, secrets, scopes, and issued tokens.

pub mod access_token;
pub mod authorization;
pub mod client;
pub mod scope;
pub mod secret;
pub mod user;

pub use access_token::*;
pub use authorization::*;
pub use client::*;
pub use scope::*;
pub use secret::*;
pub use user::*;
