pub mod document;
pub mod schema;

pub use document::{
    ApiDocument, Components, HttpMethod, MediaType, Operation, PathItem, RequestBody, Response,
    SecurityScheme, JSON_MEDIA_TYPE,
};
pub use schema::{Schema, SchemaType};
