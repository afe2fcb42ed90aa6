use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId},
};
use thiserror::Error;

use crate::post::post_model::{NewPost, Post};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError(err.to_string())
    }
}

/// Operations the post routes need from the document store.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Inserts the post and returns its generated id.
    async fn insert(&self, post: NewPost) -> Result<ObjectId, StoreError>;

    /// All posts, newest id first.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Post>, StoreError>;

    /// Returns the number of deleted posts.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Returns the number of deleted posts (0 or 1).
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StoreError>;

    /// Sets title and text; returns the number of matched posts (0 or 1).
    async fn update_by_id(
        &self,
        id: ObjectId,
        title: &str,
        text: &str,
    ) -> Result<u64, StoreError>;
}

pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection::<Post>(collection);
        MongoPostStore { collection }
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert(&self, post: NewPost) -> Result<ObjectId, StoreError> {
        let result = self
            .collection
            .clone_with_type::<NewPost>()
            .insert_one(post)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError("inserted id is not an ObjectId".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": -1 }).await?;
        let posts: Vec<Post> = cursor.try_collect().await?;
        Ok(posts)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Post>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        title: &str,
        text: &str,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "title": title, "text": text } },
            )
            .await?;
        Ok(result.matched_count)
    }
}
