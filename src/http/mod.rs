//! HTTP client construction, request preparation, and the transport seam
//! the dispatcher sends through.
mod client;
mod request;
mod transport;

#[cfg(test)]
mod tests;

pub use client::{ClientSettings, DEFAULT_REQUEST_TIMEOUT, build_client};
pub use request::{BodyKind, PreparedRequest, encode_body};
pub use transport::{HttpTransport, Transport, TransportResponse};
