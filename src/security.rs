//! Security primitives shared by every layer: OS-backed randomness, constant-time comparison,
//! and the URL-safe text encoding used for secrets and tokens.

pub mod compare;
pub mod encoding;
pub mod random;

pub use compare::*;
pub use encoding::*;
pub use random::*;
