//! Walks through a Steam sign-in: print the redirect URL, then (when a callback URL is passed as
//! the first argument) confirm it with Steam and fetch the player's summary.
//!
//! ```sh
//! STEAM_API_KEY=... cargo run --example steam_login
//! STEAM_API_KEY=... cargo run --example steam_login -- 'http://localhost:8080/auth/steam/callback?openid.mode=id_res&...'
//! ```

// std
use std::{env, time::Duration};
// crates.io
use color_eyre::{Result, eyre::eyre};
use url::Url;
// self
use steam_openid_broker::{flows::Authenticator, openid::CallbackParams};

const REALM: &str = "http://localhost:8080";
const RETURN_TO: &str = "http://localhost:8080/auth/steam/callback";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let api_key = env::var("STEAM_API_KEY").map_err(|_| eyre!("Set STEAM_API_KEY first."))?;
	let authenticator =
		Authenticator::builder(api_key, REALM).timeout(Duration::from_secs(10)).build();

	println!("Send your user to {}.", authenticator.authorization_url(RETURN_TO)?);

	let Some(callback) = env::args().nth(1) else {
		println!("Re-run with the callback URL Steam redirected to.");

		return Ok(());
	};
	let params = CallbackParams::from_url(&Url::parse(&callback)?);

	match authenticator.authenticate(&params).await {
		Ok((steam_id, summary)) => {
			println!("Signed in as {steam_id} ({}).", summary.persona_name);
			println!("Profile: {}.", summary.profile_url);
		},
		Err(e) if e.is_transport() => eprintln!("Could not reach Steam, try again: {e}."),
		Err(e) => eprintln!("Sign-in denied: {e}."),
	}

	Ok(())
}
