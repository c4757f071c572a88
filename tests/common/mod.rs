#![allow(dead_code)]

use std::path::PathBuf;

use admock::config::Config;
use admock::database::JsonDatabase;
use tempfile::TempDir;

/// A live database in a scratch directory, seeded from the shipped
/// `db.initial.json`.
pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
    pub db: JsonDatabase,
}

impl Fixture {
    pub async fn new() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let initial_db_file = dir.path().join("db.initial.json");
        std::fs::copy(seed_file(), &initial_db_file).unwrap();

        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            db_file: dir.path().join("db.json"),
            initial_db_file,
        };
        let db = JsonDatabase::initialize(&config).await.unwrap();

        Fixture { dir, config, db }
    }

    /// Overwrites the live document, as a hand edit would. Only use before
    /// the app first reads it.
    pub fn write_document(&self, document: &serde_json::Value) {
        let raw = serde_json::to_vec_pretty(document).unwrap();
        std::fs::write(&self.config.db_file, raw).unwrap();
    }

    /// The live document as currently written on disk.
    pub fn document(&self) -> serde_json::Value {
        let raw = std::fs::read(&self.config.db_file).unwrap();
        serde_json::from_slice(&raw).unwrap()
    }
}

pub fn seed_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("db.initial.json")
}

macro_rules! init_app {
    ($fixture:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    Box::new($fixture.db.clone()) as Box<dyn admock::database::Database>
                ))
                .configure(admock::configure),
        )
        .await
    };
}
