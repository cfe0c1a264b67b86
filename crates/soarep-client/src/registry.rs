//! The resource registry.
//!
//! [`ResourceRegistry`] pairs the static endpoint table with a transport and
//! a server root. It holds no other state and never changes after
//! construction, so it can be cloned and shared freely across tasks.

use std::fmt;
use std::sync::Arc;

use reqwest::Url;

use crate::config::ClientConfig;
use crate::descriptor::{RESOURCES, ResourceDescriptor, ResourceKind};
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::transport::{HttpClient, ReqwestClient};

/// Maps resource names to callable [`Resource`] handles.
///
/// # Example
///
/// ```rust,ignore
/// use soarep_client::{ClientConfig, Params, ResourceRegistry};
///
/// let registry = ResourceRegistry::from_config(&ClientConfig::default())?;
///
/// // GET /v1/team/services
/// let team = registry.team().query_default().await?;
///
/// // GET /v1/team/platform
/// let platform = registry
///     .team()
///     .query(&Params::new().with("teamId", "platform"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct ResourceRegistry {
    client: Arc<dyn HttpClient>,
    base_url: Url,
}

impl ResourceRegistry {
    /// Create a registry over an injected transport.
    pub fn new(client: Arc<dyn HttpClient>, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_url(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }
        Ok(Self { client, base_url })
    }

    /// Create a registry with a [`ReqwestClient`] built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let client = ReqwestClient::new(config)?;
        tracing::debug!(base_url = %base_url, timeout_secs = config.timeout_secs, "Created resource registry");
        Self::new(Arc::new(client), base_url)
    }

    /// Server root that resource templates are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &dyn HttpClient {
        self.client.as_ref()
    }

    /// Every registered descriptor, in table order.
    pub fn descriptors() -> impl Iterator<Item = &'static ResourceDescriptor> {
        RESOURCES.iter()
    }

    /// Look up a resource by name.
    ///
    /// Matching is case-insensitive and ignores `-` and `_`.
    pub fn resource(&self, name: &str) -> Result<Resource<'_>> {
        let kind: ResourceKind = name.parse()?;
        Ok(self.get(kind))
    }

    /// Handle for a known resource.
    pub fn get(&self, kind: ResourceKind) -> Resource<'_> {
        Resource::new(self, kind.descriptor())
    }

    /// `Tree`: `/v1/tree`, array.
    pub fn tree(&self) -> Resource<'_> {
        self.get(ResourceKind::Tree)
    }

    /// `Team`: `/v1/team/:teamId`, object.
    pub fn team(&self) -> Resource<'_> {
        self.get(ResourceKind::Team)
    }

    /// `Service`: `/v1/service/:serviceId`, object.
    pub fn service(&self) -> Resource<'_> {
        self.get(ResourceKind::Service)
    }

    /// `ServiceNotUses`: `/v1/service/:serviceId/notuses`, object.
    pub fn service_not_uses(&self) -> Resource<'_> {
        self.get(ResourceKind::ServiceNotUses)
    }

    /// `DataStore`: `/v1/datastore/:dataStoreId`, object.
    pub fn data_store(&self) -> Resource<'_> {
        self.get(ResourceKind::DataStore)
    }

    /// `Portal`: `/v1/portal`, array.
    pub fn portal(&self) -> Resource<'_> {
        self.get(ResourceKind::Portal)
    }

    /// `Graph`: `/v1/graph`, object.
    pub fn graph(&self) -> Resource<'_> {
        self.get(ResourceKind::Graph)
    }

    /// `Config`: `/v1/config`, object.
    pub fn config(&self) -> Resource<'_> {
        self.get(ResourceKind::Config)
    }

    /// `User`: `/v1/users`, object.
    pub fn user(&self) -> Resource<'_> {
        self.get(ResourceKind::User)
    }
}

impl fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("base_url", &self.base_url.as_str())
            .field("resources", &RESOURCES.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
