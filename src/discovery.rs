use log::info;

use crate::error::Result;
use crate::transport::HttpTransport;

/// Public discovery broker run by the bridge vendor
pub const DISCOVERY_URL: &str = "https://discovery.meethue.com";

#[derive(Deserialize, Serialize, Debug, Clone)]
/// One bridge candidate as reported by the discovery broker
pub struct DiscoveredBridge {
	#[serde(default)]
	pub id: String,
	pub internalipaddress: String,
	#[serde(default)]
	pub port: Option<u16>,
}

/// Ask the discovery broker which bridges sit on the local network.
///
/// The broker lists every bridge that has phoned home from the same
/// public IP as the caller. An empty list is returned as such; deciding
/// whether that is an error is left to the caller.
pub fn find_bridges<T: HttpTransport>(transport: &T) -> Result<Vec<DiscoveredBridge>> {
	let candidates = transport.get(DISCOVERY_URL)?;
	let bridges: Vec<DiscoveredBridge> = serde_json::from_value(candidates)?;
	info!("discovery broker returned {} bridge(s)", bridges.len());
	Ok(bridges)
}
