use std::collections::HashMap;

use actix_web::get;
use actix_web::web::{Data, Json, Path, Query};
use serde_json::Value;

use crate::database::Database;
use crate::error::Error;

use super::manager;

#[get("/{collection}")]
#[tracing::instrument(skip(db))]
pub async fn get_collection(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
    query: Query<HashMap<String, String>>,
) -> Result<Json<Value>, Error> {
    let collection = params.into_inner();
    let filters = query.into_inner();
    let body = manager::get_collection(&***db, &collection, &filters).await?;

    Ok(Json(body))
}

#[get("/{collection}/{record_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_record_in_collection_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<(String, String)>,
) -> Result<Json<Value>, Error> {
    let (collection, record_id) = params.into_inner();
    let body = manager::get_record_by_id(&***db, &collection, &record_id).await?;

    Ok(Json(body))
}
