use crate::post::post_index::post_routes;
use actix_web::web;

pub const API_PREFIX: &str = "/api/v1";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(post_routes));
}
