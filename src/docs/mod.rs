use utoipa::OpenApi;
use crate::models::*;

/// Root greeting endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "api",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
    ),
    components(
        schemas(RootResponse, HealthResponse)
    ),
    tags(
        (name = "service", description = "Service status"),
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI document titled with the configured service name
pub fn api_doc(service_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = service_name.to_string();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_routes() {
        let doc = api_doc("Plan Checker");
        assert_eq!(doc.info.title, "Plan Checker");
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }
}
