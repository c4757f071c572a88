use crate::database::Database;
use crate::error::Error;

#[tracing::instrument(skip(db))]
pub async fn reset_database(db: &dyn Database) -> Result<(), Error> {
    db.reset().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;
    use std::io::{Error as IoError, ErrorKind};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn reset_database_resets_store() {
        let mut db = MockDatabase::new();
        let called_reset = Arc::new(Mutex::new(false));
        let called_reset_clone = Arc::clone(&called_reset);
        db.on_reset = Box::new(move |_| {
            *called_reset_clone.lock().unwrap() = true;
            Ok(())
        });

        reset_database(&db).await.unwrap();

        assert!(*called_reset.lock().unwrap(), "db.reset was not called");
    }

    #[tokio::test]
    async fn reset_database_propagates_io_failure() {
        let mut db = MockDatabase::new();
        db.on_reset = Box::new(|_| {
            Err(Error::FailedToResetDocument(IoError::new(
                ErrorKind::PermissionDenied,
                "db.json",
            )))
        });

        let result = reset_database(&db).await;

        assert!(matches!(result, Err(Error::FailedToResetDocument(_))));
    }
}
