use async_trait::async_trait;

use crate::collection::has_id;
use crate::document::JsonDocument;
use crate::error::Error;

use super::Music;

#[async_trait]
pub trait MusicStore: Send + Sync {
    async fn fetch_music_by_id(&self, music_id: &str) -> Result<Option<Music>, Error>;
}

#[async_trait]
impl MusicStore for JsonDocument {
    #[tracing::instrument(skip(self))]
    async fn fetch_music_by_id(&self, music_id: &str) -> Result<Option<Music>, Error> {
        let record = self
            .read(|document| {
                document
                    .records("music")
                    .iter()
                    .find(|record| has_id(record, music_id))
                    .cloned()
            })
            .await?;

        // only objects carry an id, and every field of `Music` is optional
        let music = record
            .map(serde_json::from_value::<Music>)
            .transpose()
            .map_err(Error::FailedToParseDocument)?;

        Ok(music)
    }
}
