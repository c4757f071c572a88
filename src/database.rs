use std::sync::Arc;

use async_trait::async_trait;

use crate::ad::db::AdStore;
use crate::collection::db::CollectionStore;
use crate::config::Config;
use crate::document::JsonDocument;
use crate::error::Error;
use crate::music::db::MusicStore;

#[async_trait]
pub trait Database: Send + Sync {
    fn ads(&self) -> &dyn AdStore;

    fn music(&self) -> &dyn MusicStore;

    fn collections(&self) -> &dyn CollectionStore;

    async fn reset(&self) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct JsonDatabase {
    document: Arc<JsonDocument>,
}

impl JsonDatabase {
    pub fn new(document: JsonDocument) -> JsonDatabase {
        JsonDatabase {
            document: Arc::new(document),
        }
    }

    pub async fn initialize(config: &Config) -> Result<JsonDatabase, Error> {
        let document = JsonDocument::new(config.db_file.clone(), config.initial_db_file.clone());
        document.initialize().await?;

        Ok(JsonDatabase::new(document))
    }
}

#[async_trait]
impl Database for JsonDatabase {
    fn ads(&self) -> &dyn AdStore {
        &*self.document
    }

    fn music(&self) -> &dyn MusicStore {
        &*self.document
    }

    fn collections(&self) -> &dyn CollectionStore {
        &*self.document
    }

    async fn reset(&self) -> Result<(), Error> {
        self.document.reset().await
    }
}
