use thiserror::Error;

#[derive(Error, Debug)]
/// Everything that can go wrong while talking to a Hue bridge
pub enum Error {
	/// The HTTP transport failed
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
	/// A response body was not the JSON we expected
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
	/// The discovery broker knows of no bridge on this network
	#[error("no bridge found; the bridge and this host must share a network")]
	NoBridgeFound,
	/// The operation needs a bridge IP address, but none is set
	#[error("bridge IP address not set; discover a bridge or supply an address")]
	IpNotSet,
	/// The operation needs an application username, but none is set
	#[error("application username not set; register one first")]
	UsernameNotSet,
}

pub type Result<T> = std::result::Result<T, Error>;
