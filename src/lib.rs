//! OAuth 2.0 token issuance core: authenticate the client, dispatch to a registered grant
//! strategy, and mint bearer tokens with RFC 6749 error semantics on every failure path.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod authenticator;
pub mod error;
pub mod grants;
pub mod issuer;
pub mod oauth;
pub mod obs;
pub mod request;
pub mod security;
pub mod settings;
pub mod store;
pub mod strategy;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use color_eyre as _;
