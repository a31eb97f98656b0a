//! Client library for the local REST API of a Philips Hue bridge.
//!
//! The [`Bridge`] client issues blocking HTTP requests through any
//! [`HttpTransport`] the caller supplies; `reqwest::blocking::Client`
//! implements the trait out of the box.
#[macro_use]
extern crate serde_derive;
extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate thiserror;
pub mod error;
pub use error::{Error, Result};
pub mod color;
pub use color::rgb_to_hsb;
pub mod lights;
pub mod groups;
pub mod scenes;
pub mod transport;
pub use transport::HttpTransport;
pub mod bridge;
pub use bridge::Bridge;
mod discovery;
pub use discovery::{find_bridges, DiscoveredBridge};
