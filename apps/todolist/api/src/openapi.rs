use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorEnvelope, axum_helpers::FieldError, axum_helpers::Location)),
    info(
        title = "Todo List API",
        version = "0.1.0",
        description = "Categories and the tasks filed under them"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/categories", api = domain_categories::ApiDoc),
        (path = "/tasks", api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for resource in ["categories", "tasks"] {
            for path in [
                format!("/{resource}"),
                format!("/{resource}/new"),
                format!("/{resource}/{{id}}"),
                format!("/{resource}/update/{{id}}"),
                format!("/{resource}/delete/{{id}}"),
            ] {
                assert!(paths.contains_key(&path), "missing {path}");
            }
        }
    }
}
