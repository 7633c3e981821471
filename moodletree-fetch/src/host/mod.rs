//! Host implementations of the transport.
//!
//! - [`http`] - reqwest-backed HTTP transport

pub mod http;
