//! HTTP transport to the chat backend.

pub mod http;

pub use http::{HttpTransport, TransportError};
