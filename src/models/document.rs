use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::openapi::info::Info;
use utoipa::openapi::server::Server;
use utoipa::openapi::tag::Tag;

use crate::errors::DemoResult;
use crate::models::schema::Schema;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Root of the generated OpenAPI 3.0 document.
///
/// Field order is the serialization order: `openapi`, `info`, `servers`,
/// `paths`, `components`, `tags`. Every map keeps its authoring order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocument {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
    pub tags: Vec<Tag>,
}

impl ApiDocument {
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.components.schemas.get(name)
    }

    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }

    /// 2-space indented JSON with non-ASCII characters written as-is.
    pub fn to_pretty_json(&self) -> DemoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// API key scheme. Keys serialize as `type`, `description`, `name`, `in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
}

impl SecurityScheme {
    pub fn api_key_header(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: "apiKey".to_string(),
            description: description.into(),
            name: name.into(),
            location: "header".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Get,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Order in which operations are serialized and rendered.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Post,
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "post",
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, method: HttpMethod, operation: Operation) -> Self {
        *self.slot_mut(method) = Some(operation);
        self
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }

    /// Present operations, POST first, then GET, PUT, PATCH, DELETE.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }

    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Post => &mut self.post,
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Delete => &mut self.delete,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: String,
    pub description: String,
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none", default)]
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    pub fn new(
        tag: impl Into<String>,
        operation_id: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tags: vec![tag.into()],
            summary: summary.into(),
            description: description.into(),
            operation_id: operation_id.into(),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }

    /// The `application/json` request example, if the operation declares one.
    pub fn request_example(&self) -> Option<&Value> {
        self.request_body
            .as_ref()
            .and_then(|body| body.content.get(JSON_MEDIA_TYPE))
            .and_then(|media| media.example.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    pub description: String,
    pub required: bool,
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    pub fn json(description: impl Into<String>, media: MediaType) -> Self {
        let mut content = IndexMap::new();
        content.insert(JSON_MEDIA_TYPE.to_string(), media);
        Self {
            description: description.into(),
            required: true,
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn json(description: impl Into<String>, media: MediaType) -> Self {
        let mut content = IndexMap::new();
        content.insert(JSON_MEDIA_TYPE.to_string(), media);
        Self {
            description: description.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<Value>,
}

impl MediaType {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            example: None,
        }
    }

    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}
