//! Steam OpenID 2.0 sign-in for Rust web apps: build the login redirect, verify the provider's
//! callback through a server-to-server confirmation, and fetch the verified player's summary.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod openid;
pub mod profile;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
