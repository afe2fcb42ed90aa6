use super::post_controller::{
    create_post, delete_all_posts, delete_post, get_post, list_posts, update_post,
};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/post", web::post().to(create_post))
        .route("/posts", web::get().to(list_posts))
        .route("/posts/all", web::delete().to(delete_all_posts))
        .route("/post/{postId}", web::get().to(get_post))
        .route("/post/{postId}", web::delete().to(delete_post))
        .route("/post/{postId}", web::put().to(update_post));
}
