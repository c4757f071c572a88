use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::{self, Data, JsonConfig, PathConfig, QueryConfig, ServiceConfig};
use actix_web::{App, HttpServer, ResponseError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod ad;
pub mod admin;
pub mod collection;
pub mod config;
pub mod database;
pub mod document;
pub mod error;
pub mod music;
pub mod oauth;
pub mod utils;

use crate::config::Config;
use crate::database::{Database, JsonDatabase};
use crate::error::Error;

/// Every route is served both at the root and under this prefix.
pub const API_PREFIX: &str = "/api";

/// Registers the extractor error formats, every route and the fallback.
/// The database is expected as `Data<Box<dyn Database>>` app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
        // format json errors with custom format
        Error::InvalidJson(err).into()
    }))
    .app_data(PathConfig::default().error_handler(|err, _req| {
        // format path errors with custom format
        Error::InvalidPath(err).into()
    }))
    .app_data(QueryConfig::default().error_handler(|err, _req| {
        // format query errors with custom format
        Error::InvalidQuery(err).into()
    }))
    .service(web::scope(API_PREFIX).configure(routes));

    routes(cfg);
    cfg.default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }));
}

// custom routes must come first, the generic collection routes match anything
fn routes(cfg: &mut ServiceConfig) {
    cfg.service(oauth::endpoints::exchange_token)
        .service(admin::endpoints::reset_database)
        .service(ad::endpoints::create_ad)
        .service(ad::endpoints::get_ad_by_id)
        .service(music::endpoints::validate_music_by_id)
        .service(collection::endpoints::get_collection)
        .service(collection::endpoints::get_record_in_collection_by_id);
}

/// Starts serving on an already bound listener.
pub fn serve(db: JsonDatabase, listener: TcpListener) -> Result<Server, Error> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub async fn run(config: Config) -> Result<(), Error> {
    let db = JsonDatabase::initialize(&config).await?;

    info!(
        address = %config.bind_address,
        db_file = %config.db_file.display(),
        "starting mock ads server"
    );
    let listener = TcpListener::bind(&config.bind_address)?;
    serve(db, listener)?.await?;

    Ok(())
}
