//! Ollama HTTP adapter
//!
//! Implements [`ModelInventoryGateway`](census_application::ModelInventoryGateway)
//! on top of the Ollama REST API.

pub mod gateway;
pub mod tags;

pub use gateway::{GatewayInitError, OllamaGateway};
pub use tags::decode_tags;
