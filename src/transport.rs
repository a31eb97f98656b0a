use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::Result;

/// Blocking HTTP transport used by [`Bridge`](crate::Bridge).
///
/// Every method issues exactly one request, reads the whole response body
/// as JSON and releases the connection before returning. Connection
/// pooling, retries and TLS configuration are up to the implementation.
///
/// A type that cannot satisfy all three methods cannot be handed to
/// [`Bridge::new`](crate::Bridge::new); the bound is checked at compile
/// time, before any request is made:
///
/// ```compile_fail
/// struct GetOnly;
/// // GetOnly implements no HttpTransport, so this does not build
/// let bridge = huelink::Bridge::new(GetOnly);
/// ```
pub trait HttpTransport {
	/// GET `url` and parse the response body as JSON
	fn get(&self, url: &str) -> Result<Value>;
	/// POST `body` to `url` and parse the response body as JSON
	fn post(&self, url: &str, body: &Value) -> Result<Value>;
	/// PUT `body` to `url` and parse the response body as JSON
	fn put(&self, url: &str, body: &Value) -> Result<Value>;
}

impl HttpTransport for Client {
	fn get(&self, url: &str) -> Result<Value> {
		debug!("GET {}", url);
		let response = Client::get(self, url).send()?;
		Ok(response.json()?)
	}

	fn post(&self, url: &str, body: &Value) -> Result<Value> {
		debug!("POST {}", url);
		let response = Client::post(self, url).json(body).send()?;
		Ok(response.json()?)
	}

	fn put(&self, url: &str, body: &Value) -> Result<Value> {
		debug!("PUT {}", url);
		let response = Client::put(self, url).json(body).send()?;
		Ok(response.json()?)
	}
}
