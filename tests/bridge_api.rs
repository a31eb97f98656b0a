use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::{json, Value};

use huelink::groups::Group;
use huelink::lights::Light;
use huelink::scenes::Scene;
use huelink::{find_bridges, rgb_to_hsb, Bridge, HttpTransport, Result};

/// Stands in for a real network: replays canned bridge responses and
/// keeps every request for inspection. Clones share the same script, so
/// a test can hand one handle to the bridge and keep another.
#[derive(Clone)]
struct ScriptedTransport(Rc<Script>);

struct Script {
	requests: RefCell<Vec<(String, String, Option<Value>)>>,
	responses: RefCell<VecDeque<Value>>,
}

impl ScriptedTransport {
	fn new(responses: Vec<Value>) -> ScriptedTransport {
		ScriptedTransport(Rc::new(Script {
			requests: RefCell::new(Vec::new()),
			responses: RefCell::new(responses.into()),
		}))
	}

	fn exchange(&self, method: &str, url: &str, body: Option<&Value>) -> Result<Value> {
		self.0
			.requests
			.borrow_mut()
			.push((method.to_owned(), url.to_owned(), body.cloned()));
		Ok(self
			.0
			.responses
			.borrow_mut()
			.pop_front()
			.expect("script ran out of responses"))
	}

	fn request(&self, index: usize) -> (String, String, Option<Value>) {
		self.0.requests.borrow()[index].clone()
	}
}

impl HttpTransport for ScriptedTransport {
	fn get(&self, url: &str) -> Result<Value> {
		self.exchange("GET", url, None)
	}

	fn post(&self, url: &str, body: &Value) -> Result<Value> {
		self.exchange("POST", url, Some(body))
	}

	fn put(&self, url: &str, body: &Value) -> Result<Value> {
		self.exchange("PUT", url, Some(body))
	}
}

#[test]
fn first_time_setup_then_light_control() {
	// The flow a sketch runs on first boot: discover the bridge, register
	// a username, then start driving lights.
	let transport = ScriptedTransport::new(vec![
		json!([{"id": "001788fffe4f2a15", "internalipaddress": "192.168.1.42", "port": 443}]),
		json!([{"success": {"username": "3ff49b7bd8e7a50a6d2b"}}]),
		json!([{"success": {"/lights/1/state/on": true}}]),
	]);
	let script = transport.clone();
	let mut bridge = Bridge::new(transport);

	let ip = bridge.discover_bridge().unwrap();
	assert_eq!(ip, "192.168.1.42");

	let username = bridge.register_username("huelink#workbench").unwrap();
	assert_eq!(username.as_deref(), Some("3ff49b7bd8e7a50a6d2b"));
	assert_eq!(
		bridge.username_url().unwrap(),
		"http://192.168.1.42/api/3ff49b7bd8e7a50a6d2b"
	);

	// Drive the light to a converted RGB color, like the original
	// first-boot sketch does with yellow.
	let (hue, sat, bri) = rgb_to_hsb([255, 255, 0]);
	bridge
		.set_light(1, &json!({"on": true, "hue": hue, "sat": sat, "bri": bri}))
		.unwrap();

	let (method, url, body) = script.request(2);
	assert_eq!(method, "PUT");
	assert_eq!(
		url,
		"http://192.168.1.42/api/3ff49b7bd8e7a50a6d2b/lights/1/state"
	);
	assert_eq!(
		body,
		Some(json!({"on": true, "hue": 10923, "sat": 254, "bri": 127}))
	);
}

#[test]
fn discovery_lists_every_candidate() {
	let transport = ScriptedTransport::new(vec![json!([
		{"id": "001788fffe4f2a15", "internalipaddress": "10.0.0.17"},
		{"id": "001788fffe9a3c01", "internalipaddress": "10.0.0.23", "port": 443}
	])]);
	let bridges = find_bridges(&transport).unwrap();
	assert_eq!(bridges.len(), 2);
	assert_eq!(bridges[1].internalipaddress, "10.0.0.23");
	assert_eq!(bridges[1].port, Some(443));
}

#[test]
fn resource_documents_deserialize_into_typed_views() {
	let transport = ScriptedTransport::new(vec![
		json!({
			"name": "Desk",
			"type": "Extended color light",
			"modelid": "LCT007",
			"state": {"on": true, "bri": 144, "hue": 13088, "sat": 212, "reachable": true}
		}),
		json!({
			"name": "Living room",
			"lights": ["1", "2"],
			"type": "LightGroup",
			"action": {"on": true, "bri": 254}
		}),
		json!({
			"name": "Sunset",
			"lights": ["1"],
			"owner": "3ff49b7bd8e7a50a6d2b",
			"version": 2
		}),
	]);
	let bridge = Bridge::new(transport)
		.with_ip("192.168.1.42")
		.with_username("3ff49b7bd8e7a50a6d2b");

	let light: Light = serde_json::from_value(bridge.get_light(1).unwrap()).unwrap();
	assert_eq!(light.name, "Desk");
	assert_eq!(light.state.hue, 13088);
	assert!(light.state.reachable);

	let group: Group = serde_json::from_value(bridge.get_group(1).unwrap()).unwrap();
	assert_eq!(group.lights, vec!["1", "2"]);
	assert!(group.action.on);

	let scene: Scene = serde_json::from_value(bridge.get_scene("AB34EF5").unwrap()).unwrap();
	assert_eq!(scene.name, "Sunset");
	assert_eq!(scene.version, 2);
}

#[test]
fn toggling_round_trips_through_the_bridge_state() {
	let transport = ScriptedTransport::new(vec![
		json!({"name": "Desk", "state": {"on": false}}),
		json!([{"success": {"/lights/2/state/on": true}}]),
	]);
	let script = transport.clone();
	let bridge = Bridge::new(transport)
		.with_ip("192.168.1.42")
		.with_username("3ff49b7bd8e7a50a6d2b");

	bridge.toggle_light(2).unwrap();

	let (method, url, body) = script.request(1);
	assert_eq!(method, "PUT");
	assert!(url.ends_with("/lights/2/state"));
	assert_eq!(body, Some(json!({"on": true})));
}
