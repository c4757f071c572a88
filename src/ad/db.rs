use async_trait::async_trait;

use crate::document::JsonDocument;
use crate::error::Error;

use super::Ad;

#[async_trait]
pub trait AdStore: Send + Sync {
    /// Appends the ad, assigning it the next sequential `id`.
    async fn insert_ad(&self, ad: Ad) -> Result<Ad, Error>;

    async fn fetch_ad_by_id(&self, ad_id: &str) -> Result<Option<Ad>, Error>;
}

#[async_trait]
impl AdStore for JsonDocument {
    #[tracing::instrument(skip(self))]
    async fn insert_ad(&self, mut ad: Ad) -> Result<Ad, Error> {
        let ad = self
            .mutate(|document| {
                ad.id = document.ads.len() as u64 + 1;
                document.ads.push(ad.clone());
                ad
            })
            .await?;

        Ok(ad)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_by_id(&self, ad_id: &str) -> Result<Option<Ad>, Error> {
        let ad = self
            .read(|document| {
                document
                    .ads
                    .iter()
                    .find(|ad| ad.is_identified_by(ad_id))
                    .cloned()
            })
            .await?;

        Ok(ad)
    }
}
