use std::thread;
use std::time::Duration;

use log::{info, warn};
use serde_json::{json, Value};

use crate::discovery;
use crate::error::{Error, Result};
use crate::lights::Light;
use crate::transport::HttpTransport;

/// Pause between two polls for a link button press
const LINK_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// How many times registration polls the bridge before giving up
const LINK_POLL_ATTEMPTS: u32 = 1;

/// Client for the local REST API of a Hue bridge.
///
/// A `Bridge` owns the transport it talks through and the two pieces of
/// state the API needs: the bridge's IP address and the application
/// username the bridge issued. Both can be supplied up front or obtained
/// through [`discover_bridge`](Bridge::discover_bridge) and
/// [`register_username`](Bridge::register_username).
///
/// ```no_run
/// use huelink::Bridge;
///
/// # fn main() -> huelink::Result<()> {
/// let transport = reqwest::blocking::Client::new();
/// let mut bridge = Bridge::new(transport);
/// let ip = bridge.discover_bridge()?;
/// if bridge.register_username("huelink#livingroom")?.is_none() {
/// 	eprintln!("press the link button on the bridge at {} and retry", ip);
/// }
/// bridge.set_light(1, &serde_json::json!({"on": true}))?;
/// # Ok(())
/// # }
/// ```
pub struct Bridge<T: HttpTransport> {
	transport: T,
	ip: Option<String>,
	username: Option<String>,
}

impl<T: HttpTransport> Bridge<T> {
	/// Create a client without an address or credentials
	pub fn new(transport: T) -> Bridge<T> {
		Bridge {
			transport,
			ip: None,
			username: None,
		}
	}

	/// Use a known bridge IP address instead of discovering one
	pub fn with_ip(mut self, ip: impl Into<String>) -> Bridge<T> {
		self.ip = Some(ip.into());
		self
	}

	/// Use a previously registered application username
	pub fn with_username(mut self, username: impl Into<String>) -> Bridge<T> {
		self.username = Some(username.into());
		self
	}

	/// The bridge IP address, if known
	pub fn ip(&self) -> Option<&str> {
		self.ip.as_deref()
	}

	/// The registered application username, if any
	pub fn username(&self) -> Option<&str> {
		self.username.as_deref()
	}

	/// Unauthenticated API root, `http://{ip}/api`
	pub fn base_url(&self) -> Result<String> {
		let ip = self.ip.as_ref().ok_or(Error::IpNotSet)?;
		Ok(format!("http://{}/api", ip))
	}

	/// Authenticated API root, `http://{ip}/api/{username}`
	pub fn username_url(&self) -> Result<String> {
		let username = self.username.as_ref().ok_or(Error::UsernameNotSet)?;
		Ok(format!("{}/{}", self.base_url()?, username))
	}

	/// Find a bridge through the public discovery broker and remember
	/// its IP address.
	///
	/// The first candidate the broker reports wins. If the broker knows
	/// of no bridge behind the caller's public IP, this fails with
	/// [`Error::NoBridgeFound`]; that usually means bridge and client
	/// are not on the same network.
	pub fn discover_bridge(&mut self) -> Result<String> {
		let mut bridges = discovery::find_bridges(&self.transport)?;
		if bridges.is_empty() {
			return Err(Error::NoBridgeFound);
		}
		let bridge = bridges.remove(0);
		info!("using bridge at {}", bridge.internalipaddress);
		self.ip = Some(bridge.internalipaddress.clone());
		Ok(bridge.internalipaddress)
	}

	/// Ask the bridge to issue an application username.
	///
	/// Posts the given device type string to the API root and polls once
	/// per second, a bounded number of times, for the link button press
	/// that authorizes the registration. Returns `Ok(None)` when the
	/// button was not pressed in time; the caller is expected to prompt
	/// the user and call again.
	pub fn register_username(&mut self, devicetype: &str) -> Result<Option<String>> {
		let url = self.base_url()?;
		let body = json!({ "devicetype": devicetype });
		let mut attempts = LINK_POLL_ATTEMPTS;
		while attempts > 0 {
			let response = self.transport.post(&url, &body)?;
			if let Some(username) = issued_username(&response) {
				info!("bridge issued application username");
				self.username = Some(username.clone());
				return Ok(Some(username));
			}
			attempts -= 1;
			if attempts > 0 {
				thread::sleep(LINK_POLL_INTERVAL);
			}
		}
		warn!("link button was not pressed; no username issued");
		Ok(None)
	}

	/// All light resources known to the bridge
	pub fn get_lights(&self) -> Result<Value> {
		self.transport.get(&format!("{}/lights", self.username_url()?))
	}

	/// Attributes and state of one light
	pub fn get_light(&self, light_id: u32) -> Result<Value> {
		self.transport
			.get(&format!("{}/lights/{}", self.username_url()?, light_id))
	}

	/// Change the state of a light.
	///
	/// `state` is forwarded verbatim as the request body; any attribute
	/// the bridge understands may be set, e.g.
	/// `json!({"on": true, "hue": 21845, "sat": 254, "bri": 127})`.
	pub fn set_light(&self, light_id: u32, state: &Value) -> Result<Value> {
		self.transport.put(
			&format!("{}/lights/{}/state", self.username_url()?, light_id),
			state,
		)
	}

	/// Read a light's on/off state and invert it
	pub fn toggle_light(&self, light_id: u32) -> Result<Value> {
		let light: Light = serde_json::from_value(self.get_light(light_id)?)?;
		self.set_light(light_id, &json!({ "on": !light.state.on }))
	}

	/// All groups configured on the bridge
	pub fn get_groups(&self) -> Result<Value> {
		self.transport.get(&format!("{}/groups", self.username_url()?))
	}

	/// Attributes and state of one group
	pub fn get_group(&self, group_id: u32) -> Result<Value> {
		self.transport
			.get(&format!("{}/groups/{}", self.username_url()?, group_id))
	}

	/// Create a group from the given lights.
	///
	/// The bridge expects light ids as strings and assigns the group id
	/// itself; the response carries the id of the new group.
	pub fn create_group(&self, lights: &[u32], name: &str) -> Result<Value> {
		let ids: Vec<String> = lights.iter().map(u32::to_string).collect();
		let body = json!({ "lights": ids, "name": name, "type": "LightGroup" });
		self.transport
			.post(&format!("{}/groups", self.username_url()?), &body)
	}

	/// Change the state of every light in a group.
	///
	/// `action` is forwarded verbatim, like in [`set_light`](Bridge::set_light).
	pub fn set_group(&self, group_id: u32, action: &Value) -> Result<Value> {
		self.transport.put(
			&format!("{}/groups/{}/action", self.username_url()?, group_id),
			action,
		)
	}

	/// All scenes stored on the bridge
	pub fn get_scenes(&self) -> Result<Value> {
		self.transport.get(&format!("{}/scenes", self.username_url()?))
	}

	/// Attributes of one stored scene
	pub fn get_scene(&self, scene_id: &str) -> Result<Value> {
		self.transport
			.get(&format!("{}/scenes/{}", self.username_url()?, scene_id))
	}

	/// Recall a stored scene on a group.
	///
	/// The bridge has no scene endpoint for this; recalling goes through
	/// the Groups API.
	pub fn set_scene(&self, group_id: u32, scene_id: &str) -> Result<Value> {
		self.set_group(group_id, &json!({ "scene": scene_id }))
	}
}

// The registration response is a one-element array wrapping either a
// "success" or an "error" object.
fn issued_username(response: &Value) -> Option<String> {
	response
		.get(0)?
		.get("success")?
		.get("username")?
		.as_str()
		.map(str::to_owned)
}
