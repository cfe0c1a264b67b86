//! # soarep-client
//!
//! Client-side data access for the SOA repository REST API.
//!
//! The server exposes a small, fixed set of read endpoints. This crate
//! describes each one as a static [`ResourceDescriptor`] (URL template,
//! placeholder defaults, HTTP verb and result shape) and makes them callable
//! through a [`ResourceRegistry`]:
//!
//! | Resource | URL template | Default | Shape |
//! |---|---|---|---|
//! | Tree | `/v1/tree` | | array |
//! | Team | `/v1/team/:teamId` | `teamId=services` | object |
//! | Service | `/v1/service/:serviceId` | `serviceId=services` | object |
//! | ServiceNotUses | `/v1/service/:serviceId/notuses` | `serviceId=services` | object |
//! | DataStore | `/v1/datastore/:dataStoreId` | `dataStoreId=services` | object |
//! | Portal | `/v1/portal` | | array |
//! | Graph | `/v1/graph` | | object |
//! | Config | `/v1/config` | | object |
//! | User | `/v1/users` | | object |
//!
//! All network I/O goes through the [`HttpClient`] trait, so the registry can
//! be driven by [`ReqwestClient`] in production and by any stub in tests.
//! Failures surface as [`Error::RequestFailed`] or [`Error::DecodeError`]
//! and are never retried.
//!
//! # Modules
//!
//! - [`descriptor`]: descriptors, shapes, verbs and the endpoint table
//! - [`template`]: `:name` URL template parsing and expansion
//! - [`registry`]: the registry and its per-resource accessors
//! - [`resource`]: callable handles and response decoding
//! - [`transport`]: the HTTP seam and its reqwest implementation
//! - [`config`]: base URL, timeouts and environment overrides
//! - [`error`]: error types and Result alias

pub mod config;
pub mod descriptor;
pub mod error;
pub mod params;
mod proptests;
pub mod registry;
pub mod resource;
pub mod template;
pub mod transport;

pub use config::ClientConfig;
pub use descriptor::{Operation, RESOURCES, ResourceDescriptor, ResourceKind, Shape, Verb};
pub use error::{Error, Result};
pub use params::Params;
pub use registry::ResourceRegistry;
pub use resource::{JsonObject, QueryResult, Resource};
pub use template::UrlTemplate;
pub use transport::{HttpClient, HttpResponse, ReqwestClient};
