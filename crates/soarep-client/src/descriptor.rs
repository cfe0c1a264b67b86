//! Resource descriptors and the static endpoint table.
//!
//! Each repository endpoint is described once, at compile time, by a
//! [`ResourceDescriptor`]: its URL template, the defaults for its
//! placeholders, and the operations it supports. Nothing here performs
//! I/O; see [`crate::registry`] for the callable side.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::error::{Error, Result};
use crate::params::Params;
use crate::template::UrlTemplate;

/// Name of the single operation every resource in the table exposes.
pub const QUERY: &str = "query";

/// Decoded shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A JSON array of objects.
    Array,
    /// A single JSON object.
    Object,
}

impl Shape {
    /// Returns true for [`Shape::Array`].
    pub fn is_array(self) -> bool {
        matches!(self, Shape::Array)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => f.write_str("array"),
            Shape::Object => f.write_str("object"),
        }
    }
}

/// HTTP verb bound to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `GET`
    Get,
}

impl Verb {
    /// The verb as a [`reqwest::Method`].
    pub fn as_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => f.write_str("GET"),
        }
    }
}

/// A named operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, e.g. `"query"`.
    pub name: &'static str,
    /// HTTP verb.
    pub verb: Verb,
    /// Shape the response body must decode into.
    pub shape: Shape,
    /// Placeholder values that override the descriptor defaults for this
    /// operation only.
    pub params: &'static [(&'static str, &'static str)],
}

impl Operation {
    /// A `GET` query operation with no parameter overrides.
    pub const fn query(shape: Shape) -> Self {
        Self {
            name: QUERY,
            verb: Verb::Get,
            shape,
            params: &[],
        }
    }
}

/// Immutable description of one REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Resource name, e.g. `"Team"`.
    pub name: &'static str,
    /// URL template relative to the server root, e.g. `/v1/team/:teamId`.
    pub url_template: &'static str,
    /// Default values for placeholders.
    pub default_params: &'static [(&'static str, &'static str)],
    /// Operations the resource supports.
    pub operations: &'static [Operation],
}

impl ResourceDescriptor {
    /// Parsed form of [`Self::url_template`].
    pub fn template(&self) -> UrlTemplate<'static> {
        UrlTemplate::parse(self.url_template)
    }

    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Result<&'static Operation> {
        self.operations
            .iter()
            .find(|op| op.name == name)
            .ok_or_else(|| Error::UnknownOperation {
                resource: self.name.to_string(),
                operation: name.to_string(),
            })
    }

    /// The `query` operation.
    pub fn query(&self) -> Result<&'static Operation> {
        self.operation(QUERY)
    }

    /// Default value for a placeholder, if the descriptor declares one.
    pub fn default_for(&self, name: &str) -> Option<&'static str> {
        lookup(self.default_params, name)
    }

    /// Resolve the request URL for an operation.
    ///
    /// Placeholder values come from `params`, then the operation's
    /// overrides, then the descriptor defaults. Keys in `params` that are
    /// not placeholders are appended as query string pairs.
    ///
    /// A segment that expands to `.` or `..` is rejected with
    /// [`Error::InvalidUrl`]: it cannot be sent as a path segment without
    /// changing which endpoint is addressed.
    pub fn resolve_url(&self, base: &Url, operation: &Operation, params: &Params) -> Result<Url> {
        let template = self.template();
        let segments = template.expand(|name| {
            params
                .get(name)
                .or_else(|| lookup(operation.params, name))
                .or_else(|| self.default_for(name))
        });
        if let Some(dots) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(Error::invalid_url(format!(
                "{dots:?} is not a valid path segment for {}",
                self.name
            )));
        }

        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::invalid_url(format!("{base} cannot be used as a base URL"))
            })?;
            path.pop_if_empty();
            path.extend(segments.iter().map(String::as_str));
        }

        let extra: Vec<(&str, &str)> = params
            .iter()
            .filter(|(key, _)| !template.has_placeholder(key))
            .collect();
        url.set_query(None);
        if !extra.is_empty() {
            url.query_pairs_mut().extend_pairs(extra);
        }
        url.set_fragment(None);
        Ok(url)
    }
}

fn lookup(pairs: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    pairs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// The endpoints exposed by the repository server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// `/v1/tree`
    Tree,
    /// `/v1/team/:teamId`
    Team,
    /// `/v1/service/:serviceId`
    Service,
    /// `/v1/service/:serviceId/notuses`
    ServiceNotUses,
    /// `/v1/datastore/:dataStoreId`
    DataStore,
    /// `/v1/portal`
    Portal,
    /// `/v1/graph`
    Graph,
    /// `/v1/config`
    Config,
    /// `/v1/users`
    User,
}

impl ResourceKind {
    /// Every resource, in table order.
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Tree,
        ResourceKind::Team,
        ResourceKind::Service,
        ResourceKind::ServiceNotUses,
        ResourceKind::DataStore,
        ResourceKind::Portal,
        ResourceKind::Graph,
        ResourceKind::Config,
        ResourceKind::User,
    ];

    /// The static descriptor for this resource.
    pub fn descriptor(self) -> &'static ResourceDescriptor {
        &RESOURCES[self as usize]
    }

    /// Canonical resource name.
    pub fn as_str(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are ignored, so `service-not-uses`,
    /// `service_not_uses` and `ServiceNotUses` all match.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownResource {
                name: s.to_string(),
            })
    }
}

const DEFAULT_ID: &str = "services";

/// The endpoint table, indexed by [`ResourceKind`].
pub static RESOURCES: [ResourceDescriptor; 9] = [
    ResourceDescriptor {
        name: "Tree",
        url_template: "/v1/tree",
        default_params: &[],
        operations: &[Operation::query(Shape::Array)],
    },
    ResourceDescriptor {
        name: "Team",
        url_template: "/v1/team/:teamId",
        default_params: &[("teamId", DEFAULT_ID)],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "Service",
        url_template: "/v1/service/:serviceId",
        default_params: &[("serviceId", DEFAULT_ID)],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "ServiceNotUses",
        url_template: "/v1/service/:serviceId/notuses",
        default_params: &[("serviceId", DEFAULT_ID)],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "DataStore",
        url_template: "/v1/datastore/:dataStoreId",
        default_params: &[("dataStoreId", DEFAULT_ID)],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "Portal",
        url_template: "/v1/portal",
        default_params: &[],
        operations: &[Operation::query(Shape::Array)],
    },
    ResourceDescriptor {
        name: "Graph",
        url_template: "/v1/graph",
        default_params: &[],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "Config",
        url_template: "/v1/config",
        default_params: &[],
        operations: &[Operation::query(Shape::Object)],
    },
    ResourceDescriptor {
        name: "User",
        url_template: "/v1/users",
        default_params: &[],
        operations: &[Operation::query(Shape::Object)],
    },
];
