use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

use crate::config::AppConfig;

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(config: &AppConfig) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_uri).await?;
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;

        // Ping the server to see if you can connect to the cluster
        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        info!("Connected successfully to MongoDB");

        Ok(Self { client })
    }

    /// Closes every pooled connection; call once the server has stopped.
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}

pub async fn connect_to_mongo(config: &AppConfig) -> mongodb::error::Result<Database> {
    Database::init(config).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })
}
