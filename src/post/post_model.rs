use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A post as stored in the collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub text: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub time: DateTime<Utc>,
}

/// Insert document; `_id` is left to the driver.
#[derive(Debug, Serialize, Clone)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub time: DateTime<Utc>,
}

/// Body accepted by create and update.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct PostRequest {
    #[schema(example = "abc post title")]
    pub title: Option<String>,
    #[schema(example = "some post text")]
    pub text: Option<String>,
}

impl PostRequest {
    /// Both fields, or `None` if either is missing or empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        match (self.title.as_deref(), self.text.as_deref()) {
            (Some(title), Some(text)) if !title.is_empty() && !text.is_empty() => {
                Some((title, text))
            }
            _ => None,
        }
    }
}

/// A post as returned over HTTP, with the id as a hex string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id.to_hex(),
            title: post.title,
            text: post.text,
            time: post.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, text: Option<&str>) -> PostRequest {
        PostRequest {
            title: title.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn fields_require_both_non_empty() {
        assert_eq!(request(Some("A"), Some("B")).fields(), Some(("A", "B")));
        assert_eq!(request(None, Some("B")).fields(), None);
        assert_eq!(request(Some("A"), None).fields(), None);
        assert_eq!(request(Some(""), Some("B")).fields(), None);
        assert_eq!(request(Some("A"), Some("")).fields(), None);
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(request(Some(" "), Some(" ")).fields(), Some((" ", " ")));
    }

    #[test]
    fn response_exposes_hex_id() {
        let id = ObjectId::new();
        let post = Post {
            id,
            title: "A".into(),
            text: "B".into(),
            time: Utc::now(),
        };

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["title"], "A");
        assert_eq!(json["text"], "B");
    }
}
