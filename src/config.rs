use std::env;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub mongo_uri: String,
    pub database_name: String,
    pub posts_collection: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5002),
            workers: lookup("WORKERS")
                .and_then(|w| w.parse().ok())
                .filter(|w| *w > 0),
            mongo_uri: lookup("MONGO_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("MONGO_DB_NAME").unwrap_or_else(|| "cruddb".to_string()),
            posts_collection: lookup("MONGO_POSTS_COLLECTION")
                .unwrap_or_else(|| "mongo-posts".to_string()),
        }
    }
}

/// Name reported in every response envelope.
pub fn service_name() -> String {
    env::var("SERVICE_NAME").unwrap_or_else(|_| "post-crud-api".to_string())
}
