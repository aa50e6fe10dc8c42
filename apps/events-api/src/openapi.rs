//! OpenAPI documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for managing events",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Service info plus every domain's paths. Event paths are already absolute,
/// so the domain document is merged rather than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_events::ApiDoc::openapi())
    }
}
