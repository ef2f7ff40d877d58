//! Builds the OpenID 2.0 redirect that starts the sign-in handshake.

// self
use crate::{
	_prelude::*,
	flows::Authenticator,
	obs::{self, FlowKind},
	openid::{
		IDENTIFIER_SELECT, OPENID_NS_2_0, OpenIdMode, PARAM_CLAIMED_ID, PARAM_IDENTITY, PARAM_MODE,
		PARAM_NS, PARAM_REALM, PARAM_RETURN_TO,
	},
};

impl Authenticator {
	/// Builds the URL the user should be redirected to in order to sign in through Steam.
	///
	/// `return_to` is where Steam sends the user afterwards; the handler there should pass the
	/// received query to [`Authenticator::validate_callback`]. No request is made.
	pub fn authorization_url(&self, return_to: impl AsRef<str>) -> Result<Url> {
		obs::observe_sync(FlowKind::Authorize, || self.build_authorization_url(return_to.as_ref()))
	}

	fn build_authorization_url(&self, return_to: &str) -> Result<Url> {
		let mut url = self.endpoints.openid_login_url()?;

		url.query_pairs_mut()
			.append_pair(PARAM_NS, OPENID_NS_2_0)
			.append_pair(PARAM_MODE, OpenIdMode::CheckIdSetup.as_str())
			.append_pair(PARAM_REALM, &self.realm)
			.append_pair(PARAM_RETURN_TO, return_to)
			// The user has not asserted who they are yet.
			.append_pair(PARAM_CLAIMED_ID, IDENTIFIER_SELECT)
			.append_pair(PARAM_IDENTITY, IDENTIFIER_SELECT);

		Ok(url)
	}
}
