#[derive(Deserialize, Serialize, Debug, Default)]
/// Attributes of a group of lights
pub struct Group {
	pub name: String,
	/// Ids of the member lights, as the bridge reports them
	#[serde(default)]
	pub lights: Vec<String>,
	#[serde(rename = "type", default)]
	pub group_type: String,
	#[serde(default)]
	pub action: GroupAction,
}

#[derive(Deserialize, Serialize, Debug, Default)]
/// The action last sent to a group
pub struct GroupAction {
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
	#[serde(default)]
	pub colormode: String,
}
