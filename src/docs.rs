use actix_web::web;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::post::post_controller;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post CRUD API",
        description = "Create, read, update and delete posts stored in MongoDB."
    ),
    paths(
        post_controller::create_post,
        post_controller::list_posts,
        post_controller::get_post,
        post_controller::delete_all_posts,
        post_controller::delete_post,
        post_controller::update_post,
    ),
    tags((name = "posts", description = "Post management"))
)]
pub struct ApiDoc;

/// Serves the raw document at `/api-docs/openapi.json` and a viewer at `/api-docs`.
pub fn docs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/api-docs"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[::core::prelude::v1::test]
    fn document_lists_every_post_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/api/v1/post",
            "/api/v1/posts",
            "/api/v1/posts/all",
            "/api/v1/post/{postId}",
        ] {
            assert!(paths.iter().any(|p| *p == path), "missing {}", path);
        }
        assert!(!paths.iter().any(|p| p.contains("query") || p.contains("upload")));
    }

    #[actix_web::test]
    async fn serves_document_and_viewer() {
        let app = test::init_service(App::new().configure(docs_routes)).await;

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(doc["paths"]["/api/v1/post/{postId}"]["put"].is_object());

        let req = test::TestRequest::get().uri("/api-docs").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
