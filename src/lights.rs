#[derive(Deserialize, Serialize, Debug, Default)]
/// Attributes of a light
///
/// Bridges omit fields that do not apply to a light's hardware, so
/// everything except the name and the state falls back to its default.
pub struct Light {
	#[serde(default)]
	pub uniqueid: String,
	#[serde(rename = "type", default)]
	pub light_type: String,
	pub name: String,
	#[serde(default)]
	pub modelid: String,
	#[serde(default)]
	pub manufacturername: String,
	pub state: LightState,
	#[serde(default)]
	pub swversion: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
/// Current state of a light
pub struct LightState {
	pub on: bool,
	/// Brightness, 1-254
	#[serde(default)]
	pub bri: u8,
	/// Hue angle, 0-65535
	#[serde(default)]
	pub hue: u16,
	/// Saturation, 0-254
	#[serde(default)]
	pub sat: u8,
	/// Mired color temperature
	#[serde(default)]
	pub ct: u16,
	/// Alert mode
	#[serde(default)]
	pub alert: String,
	#[serde(default)]
	pub colormode: String,
	#[serde(default)]
	pub reachable: bool,
}
