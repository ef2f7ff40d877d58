//! Identity and credential types: the verified Steam identifier and the Web API key.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
