//! Callable resource handles and response decoding.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::{Operation, ResourceDescriptor, Shape};
use crate::error::{Error, Result};
use crate::params::Params;
use crate::registry::ResourceRegistry;

/// A decoded JSON object.
pub type JsonObject = serde_json::Map<String, Value>;

/// The decoded body of a successful call.
///
/// The variant is decided by the operation's declared [`Shape`], never by
/// what the server happened to send.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// Ordered sequence of objects, for array-shaped resources.
    Array(Vec<JsonObject>),
    /// A single object, for object-shaped resources.
    Object(JsonObject),
}

impl QueryResult {
    /// Decode `body` as JSON of the given shape.
    ///
    /// Array-shaped bodies must be a JSON array whose elements are all
    /// objects; object-shaped bodies must be a single JSON object.
    pub fn decode(shape: Shape, url: &str, body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| Error::json(url, e))?;

        match (shape, value) {
            (Shape::Array, Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(object) => Ok(object),
                    other => Err(Error::shape(
                        url,
                        format!(
                            "expected array of objects, element {index} is {}",
                            kind_of(&other)
                        ),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(QueryResult::Array),
            (Shape::Object, Value::Object(object)) => Ok(QueryResult::Object(object)),
            (Shape::Array, other) => Err(Error::shape(
                url,
                format!("expected JSON array, found {}", kind_of(&other)),
            )),
            (Shape::Object, other) => Err(Error::shape(
                url,
                format!("expected JSON object, found {}", kind_of(&other)),
            )),
        }
    }

    /// The shape of this result.
    pub fn shape(&self) -> Shape {
        match self {
            QueryResult::Array(_) => Shape::Array,
            QueryResult::Object(_) => Shape::Object,
        }
    }

    /// The elements, if array-shaped.
    pub fn as_array(&self) -> Option<&[JsonObject]> {
        match self {
            QueryResult::Array(items) => Some(items.as_slice()),
            QueryResult::Object(_) => None,
        }
    }

    /// The object, if object-shaped.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            QueryResult::Object(object) => Some(object),
            QueryResult::Array(_) => None,
        }
    }

    /// Number of elements (arrays) or keys (objects).
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Array(items) => items.len(),
            QueryResult::Object(object) => object.len(),
        }
    }

    /// Returns true for an empty array or an object with no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert back into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            QueryResult::Array(items) => {
                Value::Array(items.into_iter().map(Value::Object).collect())
            }
            QueryResult::Object(object) => Value::Object(object),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A resource bound to a registry's transport and base URL.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'r> {
    registry: &'r ResourceRegistry,
    descriptor: &'static ResourceDescriptor,
}

impl<'r> Resource<'r> {
    pub(crate) fn new(registry: &'r ResourceRegistry, descriptor: &'static ResourceDescriptor) -> Self {
        Self {
            registry,
            descriptor,
        }
    }

    /// Resource name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// The static descriptor behind this handle.
    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// URL that `query(params)` would request, without sending anything.
    pub fn url(&self, params: &Params) -> Result<Url> {
        let operation = self.descriptor.query()?;
        self.descriptor
            .resolve_url(self.registry.base_url(), operation, params)
    }

    /// Run the `query` operation.
    pub async fn query(&self, params: &Params) -> Result<QueryResult> {
        self.call(crate::descriptor::QUERY, params).await
    }

    /// Run the `query` operation with no per-call parameters.
    pub async fn query_default(&self) -> Result<QueryResult> {
        self.query(&Params::new()).await
    }

    /// Run the `query` operation and deserialize the shape-checked body into `T`.
    pub async fn query_as<T: DeserializeOwned>(&self, params: &Params) -> Result<T> {
        let operation = self.descriptor.query()?;
        let (url, result) = self.execute(operation, params).await?;
        serde_json::from_value(result.into_value()).map_err(|e| Error::json(url.as_str(), e))
    }

    /// Run any operation the descriptor declares.
    pub async fn call(&self, operation: &str, params: &Params) -> Result<QueryResult> {
        let operation = self.descriptor.operation(operation)?;
        let (_, result) = self.execute(operation, params).await?;
        Ok(result)
    }

    async fn execute(&self, operation: &Operation, params: &Params) -> Result<(Url, QueryResult)> {
        let url = self
            .descriptor
            .resolve_url(self.registry.base_url(), operation, params)?;

        tracing::debug!(
            resource = self.descriptor.name,
            operation = operation.name,
            verb = %operation.verb,
            url = %url,
            "Sending request"
        );

        let response = self.registry.client().send(operation.verb, &url).await?;
        if !response.is_success() {
            tracing::debug!(
                resource = self.descriptor.name,
                status = response.status,
                "Request failed"
            );
            return Err(Error::status(url.as_str(), response.status, response.text()));
        }

        let result = QueryResult::decode(operation.shape, url.as_str(), &response.body)?;
        tracing::debug!(
            resource = self.descriptor.name,
            shape = %result.shape(),
            len = result.len(),
            "Decoded response"
        );
        Ok((url, result))
    }
}
