use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use log::{debug, error, info};
use mongodb::bson::oid::ObjectId;

use crate::post::post_model::{NewPost, Post};
use crate::post::post_store::{PostStore, StoreError};
use crate::utils::error::CustomError;

pub struct PostService {
    store: Arc<dyn PostStore>,
}

fn storage_fault(action: &str, err: StoreError) -> CustomError {
    error!("Failed to {}: {}", action, err);
    CustomError::InternalServerError(format!("Failed to {}", action))
}

/// Parses a path id, rejecting anything that is not 24 hex characters.
pub fn parse_post_id(id: &str) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(id)
        .map_err(|_| CustomError::BadRequestError(format!("Invalid post id '{}'", id)))
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        PostService { store }
    }

    pub async fn create_post(&self, title: &str, text: &str) -> Result<ObjectId, CustomError> {
        // BSON keeps milliseconds only
        let new_post = NewPost {
            title: title.to_string(),
            text: text.to_string(),
            time: Utc::now().trunc_subsecs(3),
        };

        let id = self
            .store
            .insert(new_post)
            .await
            .map_err(|e| storage_fault("create post", e))?;

        info!("Created post {}", id);
        Ok(id)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        let posts = self
            .store
            .find_all()
            .await
            .map_err(|e| storage_fault("fetch posts", e))?;

        debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    pub async fn get_post(&self, id: ObjectId) -> Result<Option<Post>, CustomError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| storage_fault("fetch post", e))
    }

    pub async fn delete_all_posts(&self) -> Result<u64, CustomError> {
        let deleted = self
            .store
            .delete_all()
            .await
            .map_err(|e| storage_fault("delete posts", e))?;

        info!("Deleted {} posts", deleted);
        Ok(deleted)
    }

    /// Returns whether a post was deleted.
    pub async fn delete_post(&self, id: ObjectId) -> Result<bool, CustomError> {
        let deleted = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| storage_fault("delete post", e))?;

        if deleted == 1 {
            info!("Deleted post {}", id);
        }
        Ok(deleted == 1)
    }

    /// Returns whether a post matched the id.
    pub async fn update_post(
        &self,
        id: ObjectId,
        title: &str,
        text: &str,
    ) -> Result<bool, CustomError> {
        let matched = self
            .store
            .update_by_id(id, title, text)
            .await
            .map_err(|e| storage_fault("update post", e))?;

        if matched == 1 {
            info!("Updated post {}", id);
        }
        Ok(matched == 1)
    }
}
