// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # moodletree Fetch
//!
//! Moodle web service client for the `moodletree` application.
//!
//! ## Transport
//!
//! The [`transport`] module defines the HTTP GET seam:
//!
//! - [`transport::Transport`] - GET a URL with query params, return JSON
//! - [`host::http::HttpTransport`] - reqwest implementation with tracing
//!
//! ## Service Calls
//!
//! - [`envelope::request_data`] - Single place where error envelopes are detected
//! - [`auth::Authenticator`] - Exchanges credentials for a token
//! - [`resources::ResourceFetcher`] - Site info, enrolled courses, course contents
//! - [`tree::TreeBuilder`] - Concurrent fetch and fold into the file tree
//!
//! ## Example
//!
//! ```ignore
//! use moodletree_fetch::{Authenticator, HttpTransport, ServiceConfig, TreeBuilder};
//!
//! let config = ServiceConfig::default();
//! let transport = HttpTransport::new(&config)?;
//!
//! let token = Authenticator::new(&config, &transport)
//!     .get_token("student", "secret")
//!     .await?;
//!
//! let tree = TreeBuilder::new(&config, &transport).get_file_tree(&token).await?;
//! ```

// Core modules
pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod host;
pub mod resources;
pub mod transport;
pub mod tree;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root

// Errors
pub use error::{ConfigError, FetchError, TransportError};

// Configuration
pub use config::{FunctionNames, ServiceConfig};

// Transport
pub use host::http::HttpTransport;
pub use transport::{Params, Transport};

// Service calls
pub use auth::Authenticator;
pub use envelope::{api_params, request_data};
pub use resources::ResourceFetcher;
pub use tree::TreeBuilder;
