use std::collections::HashMap;

use serde_json::Value;

use crate::database::Database;
use crate::error::Error;

use super::{has_id, matches_filters};

#[tracing::instrument(skip(db))]
pub async fn get_collection(
    db: &dyn Database,
    collection: &str,
    filters: &HashMap<String, String>,
) -> Result<Value, Error> {
    let value = db
        .collections()
        .fetch_collection(collection)
        .await?
        .ok_or_else(|| Error::CollectionDoesNotExist {
            collection: collection.to_string(),
        })?;

    let value = match value {
        Value::Array(records) => Value::Array(
            records
                .into_iter()
                .filter(|record| matches_filters(record, filters))
                .collect(),
        ),
        value => value,
    };

    Ok(value)
}

#[tracing::instrument(skip(db))]
pub async fn get_record_by_id(
    db: &dyn Database,
    collection: &str,
    record_id: &str,
) -> Result<Value, Error> {
    let value = db
        .collections()
        .fetch_collection(collection)
        .await?
        .ok_or_else(|| Error::CollectionDoesNotExist {
            collection: collection.to_string(),
        })?;

    let record = match value {
        Value::Array(records) => records.into_iter().find(|record| has_id(record, record_id)),
        _ => None,
    };

    record.ok_or_else(|| Error::RecordDoesNotExistInCollection {
        collection: collection.to_string(),
        record_id: record_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;
    use serde_json::json;

    fn db_with_advertisers() -> MockDatabase {
        let mut db = MockDatabase::new();
        db.collections.on_fetch_collection = Box::new(|collection| match collection.as_str() {
            "advertisers" => Ok(Some(json!([
                { "id": 1, "advertiser_id": "adv_789012345", "status": "ACTIVE" },
                { "id": 2, "advertiser_id": "adv_000000001", "status": "PAUSED" },
            ]))),
            "settings" => Ok(Some(json!({ "currency": "USD" }))),
            _ => Ok(None),
        });
        db
    }

    #[tokio::test]
    async fn get_collection_filters_records() {
        let db = db_with_advertisers();
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), "ACTIVE".to_string());

        let advertisers = get_collection(&db, "advertisers", &filters).await.unwrap();

        assert_eq!(
            advertisers,
            json!([{ "id": 1, "advertiser_id": "adv_789012345", "status": "ACTIVE" }])
        );
    }

    #[tokio::test]
    async fn get_collection_returns_objects_as_is() {
        let db = db_with_advertisers();

        let settings = get_collection(&db, "settings", &HashMap::new()).await.unwrap();

        assert_eq!(settings, json!({ "currency": "USD" }));
    }

    #[tokio::test]
    async fn get_collection_returns_error_if_doesnt_exist() {
        let db = db_with_advertisers();

        let result = get_collection(&db, "campaigns", &HashMap::new()).await;

        assert_eq!(
            result.unwrap_err(),
            Error::CollectionDoesNotExist {
                collection: "campaigns".to_string()
            }
        );
    }

    #[tokio::test]
    async fn get_record_by_id_matches_numeric_ids() {
        let db = db_with_advertisers();

        let advertiser = get_record_by_id(&db, "advertisers", "2").await.unwrap();

        assert_eq!(advertiser["advertiser_id"], "adv_000000001");
    }

    #[tokio::test]
    async fn get_record_by_id_returns_error_if_doesnt_exist() {
        let db = db_with_advertisers();

        let result = get_record_by_id(&db, "advertisers", "9").await;

        assert_eq!(
            result.unwrap_err(),
            Error::RecordDoesNotExistInCollection {
                collection: "advertisers".to_string(),
                record_id: "9".to_string(),
            }
        );
    }
}
