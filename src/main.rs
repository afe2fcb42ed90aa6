use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use env_logger::Env;
use log::{error, info};
use serde_json::json;

mod config;
mod database;
mod docs;
mod middleware;
mod post;
mod router;
mod utils;

use config::{AppConfig, service_name};
use docs::docs_routes;
use middleware::not_found::not_found;
use post::post_service::PostService;
use post::post_store::MongoPostStore;
use router::index::routes;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post CRUD API is running",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let database = match database::connect_to_mongo(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("Could not connect to MongoDB at startup: {}", e);
            std::process::exit(1);
        }
    };

    let store = MongoPostStore::new(
        &database.client,
        &config.database_name,
        &config.posts_collection,
    );
    let post_service = web::Data::new(PostService::new(Arc::new(store)));

    info!("Starting server on http://{}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .configure(routes)
            .configure(docs_routes)
            .service(default)
            .default_service(web::to(not_found))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    // Returns once SIGINT/SIGTERM has drained the workers
    server.bind((config.host.as_str(), config.port))?.run().await?;

    info!("Server has stopped");
    database.close().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn banner_and_unknown_routes() {
        let app = test::init_service(
            App::new()
                .service(default)
                .default_service(web::to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["httpStatusCode"], 200);

        let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NOT_FOUND_ERROR");
        assert_eq!(body["message"], "Not Found: Route does not exist");
    }
}
