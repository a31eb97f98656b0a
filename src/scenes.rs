#[derive(Deserialize, Serialize, Debug, Default)]
/// Attributes of a scene stored on the bridge
pub struct Scene {
	pub name: String,
	/// Ids of the lights the scene applies to
	#[serde(default)]
	pub lights: Vec<String>,
	/// Username that created the scene
	#[serde(default)]
	pub owner: String,
	#[serde(default)]
	pub recycle: bool,
	#[serde(default)]
	pub locked: bool,
	#[serde(default)]
	pub version: u32,
}
