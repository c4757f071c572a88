use actix_web::post;
use actix_web::web::{Data, Json};

use crate::database::Database;
use crate::error::Error;
use crate::utils::SuccessBody;

use super::manager;

#[post("/__admin/reset")]
#[tracing::instrument(skip(db))]
pub async fn reset_database(db: Data<Box<dyn Database>>) -> Result<Json<SuccessBody<()>>, Error> {
    manager::reset_database(&***db).await?;

    Ok(Json(SuccessBody::message("Database reset to initial state")))
}
