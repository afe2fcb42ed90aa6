use crate::post::post_model::{PostRequest, PostResponse};
use crate::post::post_service::{PostService, parse_post_id};
use crate::router::index::API_PREFIX;
use crate::utils::error::{CustomError, ErrorResponse};
use actix_web::{HttpResponse, http::header, web};

const CREATE_USAGE: &str = r#"required parameters missing, example request body: { title: "abc post title", text: "some post text" }"#;
const UPDATE_USAGE: &str = r#"Required parameters missing. Please provide both "title" and "text"."#;
const NOT_FOUND_BY_ID: &str = "Post not found with the given id.";

fn message(text: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text.into())
}

/// An unreadable body is treated the same as one missing both fields.
fn required_fields<'a>(
    body: &'a Option<web::Json<PostRequest>>,
    usage: &str,
) -> Result<(&'a str, &'a str), CustomError> {
    body.as_ref()
        .and_then(|b| b.fields())
        .ok_or_else(|| CustomError::MissingParameterError(usage.to_string()))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/v1/post",
    tag = "posts",
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post created", body = String, content_type = "text/plain",
            headers(("Location" = String, description = "Path of the new post"))),
        (status = 403, description = "Required parameters missing", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_post(
    post_service: web::Data<PostService>,
    body: Option<web::Json<PostRequest>>,
) -> Result<HttpResponse, CustomError> {
    let (title, text) = required_fields(&body, CREATE_USAGE)?;

    let id = post_service.create_post(title, text).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("{}/post/{}", API_PREFIX, id.to_hex())))
        .content_type("text/plain; charset=utf-8")
        .body("post created"))
}

/// List every post, newest first
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [PostResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let posts: Vec<PostResponse> = post_service
        .list_posts()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by id
#[utoipa::path(
    get,
    path = "/api/v1/post/{postId}",
    tag = "posts",
    params(("postId" = String, Path, description = "24 character hex post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 400, description = "Malformed post id", body = ErrorResponse),
        (status = 404, description = "No post with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let id = parse_post_id(&post_id)?;

    match post_service.get_post(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostResponse::from(post))),
        None => Err(CustomError::NotFoundError(format!(
            "Post not found with id {}",
            post_id
        ))),
    }
}

/// Delete every post
#[utoipa::path(
    delete,
    path = "/api/v1/posts/all",
    tag = "posts",
    responses(
        (status = 200, description = "Number of deleted posts, or a notice that there were none",
            body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_all_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let deleted = post_service.delete_all_posts().await?;

    if deleted > 0 {
        Ok(message(format!("{} posts deleted successfully.", deleted)))
    } else {
        Ok(message("No posts found to delete."))
    }
}

/// Delete a post by id
#[utoipa::path(
    delete,
    path = "/api/v1/post/{postId}",
    tag = "posts",
    params(("postId" = String, Path, description = "24 character hex post id")),
    responses(
        (status = 200, description = "Deleted, or no post with this id", body = String,
            content_type = "text/plain"),
        (status = 400, description = "Malformed post id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let id = parse_post_id(&post_id)?;

    if post_service.delete_post(id).await? {
        Ok(message(format!("Post with id {} deleted successfully.", post_id)))
    } else {
        Ok(message(NOT_FOUND_BY_ID))
    }
}

/// Replace the title and text of a post
#[utoipa::path(
    put,
    path = "/api/v1/post/{postId}",
    tag = "posts",
    params(("postId" = String, Path, description = "24 character hex post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Updated, or no post with this id", body = String,
            content_type = "text/plain"),
        (status = 400, description = "Malformed post id", body = ErrorResponse),
        (status = 403, description = "Required parameters missing", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: Option<web::Json<PostRequest>>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let id = parse_post_id(&post_id)?;
    let (title, text) = required_fields(&body, UPDATE_USAGE)?;

    if post_service.update_post(id, title, text).await? {
        Ok(message(format!("Post with id {} updated successfully.", post_id)))
    } else {
        Ok(message(NOT_FOUND_BY_ID))
    }
}
