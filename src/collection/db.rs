use async_trait::async_trait;
use serde_json::Value;

use crate::document::JsonDocument;
use crate::error::Error;

#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// The raw json value stored under a top-level key of the document.
    async fn fetch_collection(&self, collection: &str) -> Result<Option<Value>, Error>;
}

#[async_trait]
impl CollectionStore for JsonDocument {
    #[tracing::instrument(skip(self))]
    async fn fetch_collection(&self, collection: &str) -> Result<Option<Value>, Error> {
        let document = self
            .read(|document| serde_json::to_value(document))
            .await?
            .map_err(Error::FailedToSerializeDocument)?;

        match document {
            Value::Object(mut collections) => Ok(collections.remove(collection)),
            _ => Err(Error::ExistentialState(
                "document did not serialize to an object".to_string(),
            )),
        }
    }
}
