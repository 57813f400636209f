use futures::future::BoxFuture;

use crate::complaint::{CategoryCount, Complaint, NewComplaint};
use crate::errors::BackendError;

#[cfg(test)]
pub(crate) mod mock;

/// Storage for complaints. Complaints can only be added, never
/// changed or removed.
pub trait Db {
    /// Returns the number of complaints per category, ordered by
    /// category label.
    fn count_by_category(&self) -> BoxFuture<Result<Vec<CategoryCount>, BackendError>>;

    /// Saves a complaint under a fresh ID and returns it as stored.
    fn insert(&self, details: NewComplaint) -> BoxFuture<Result<Complaint, BackendError>>;

    /// Returns up to `count` complaints, newest first.
    fn list_recent(&self, count: u32) -> BoxFuture<Result<Vec<Complaint>, BackendError>>;

    fn retrieve(&self, id: &str) -> BoxFuture<Result<Option<Complaint>, BackendError>>;
}

pub use self::sqlite::*;

mod sqlite {
    use std::path::Path;

    use futures::future::BoxFuture;
    use futures::FutureExt;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
    use time::OffsetDateTime;
    use uuid::Uuid;

    use crate::complaint::{CategoryCount, Complaint, NewComplaint};
    use crate::errors::BackendError;

    /// An embedded database in a single file. The pool holds one
    /// connection, so there is exactly one writer per process.
    pub struct SqliteDb {
        pool: SqlitePool,
    }

    impl SqliteDb {
        pub fn new(pool: SqlitePool) -> Self {
            SqliteDb { pool }
        }

        /// Opens the database at `path`, creating the file if necessary.
        pub async fn connect(path: impl AsRef<Path>) -> Result<Self, BackendError> {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);

            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?;

            Ok(SqliteDb::new(pool))
        }

        /// Creates the `complaints` table if it doesn't exist yet.
        pub async fn initialize(&self) -> Result<(), BackendError> {
            sqlx::query(include_str!("queries/create_table.sql"))
                .execute(&self.pool)
                .await?;

            Ok(())
        }
    }

    // these can be simplified once async functions in traits are stabilized
    impl super::Db for SqliteDb {
        fn count_by_category(&self) -> BoxFuture<Result<Vec<CategoryCount>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/count_by_category.sql"));

                let counts = query
                    .try_map(|row: SqliteRow| {
                        Ok(CategoryCount::new(
                            try_get(&row, "category")?,
                            try_get(&row, "count")?,
                        ))
                    })
                    .fetch_all(&self.pool)
                    .await?;

                Ok(counts)
            }
            .boxed()
        }

        fn insert(&self, details: NewComplaint) -> BoxFuture<Result<Complaint, BackendError>> {
            async move {
                let id = Uuid::new_v4().to_string();
                // only whole seconds are stored
                let created_at =
                    OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp());

                let query = sqlx::query(include_str!("queries/create.sql"));

                query
                    .bind(id.clone())
                    .bind(details.submitter_id.clone())
                    .bind(details.original_text.clone())
                    .bind(details.translated_text.clone())
                    .bind(details.language.clone())
                    .bind(details.category.clone())
                    .bind(details.department.clone())
                    .bind(details.status.clone())
                    .bind(created_at.unix_timestamp())
                    .execute(&self.pool)
                    .await?;

                Ok(Complaint::new(id, created_at, details))
            }
            .boxed()
        }

        fn list_recent(&self, count: u32) -> BoxFuture<Result<Vec<Complaint>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/retrieve_recent.sql"));

                let complaints = query
                    .bind(i64::from(count))
                    .try_map(|row: SqliteRow| complaint_from_row(&row))
                    .fetch_all(&self.pool)
                    .await?;

                Ok(complaints)
            }
            .boxed()
        }

        fn retrieve(&self, id: &str) -> BoxFuture<Result<Option<Complaint>, BackendError>> {
            let id = id.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/retrieve.sql"));

                let complaint = query
                    .bind(id)
                    .try_map(|row: SqliteRow| complaint_from_row(&row))
                    .fetch_optional(&self.pool)
                    .await?;

                Ok(complaint)
            }
            .boxed()
        }
    }

    fn complaint_from_row(row: &SqliteRow) -> Result<Complaint, sqlx::Error> {
        let id: String = try_get(row, "id")?;
        let created_at: i64 = try_get(row, "created_at")?;

        let details = NewComplaint {
            submitter_id: try_get(row, "submitter_id")?,
            original_text: try_get(row, "original_text")?,
            translated_text: try_get(row, "translated_text")?,
            language: try_get(row, "language")?,
            category: try_get(row, "category")?,
            department: try_get(row, "department")?,
            status: try_get(row, "status")?,
        };

        Ok(Complaint::new(
            id,
            OffsetDateTime::from_unix_timestamp(created_at),
            details,
        ))
    }

    fn try_get<'a, T: sqlx::Type<sqlx::Sqlite> + sqlx::decode::Decode<'a, sqlx::Sqlite>>(
        row: &'a SqliteRow,
        column: &str,
    ) -> Result<T, sqlx::Error> {
        use sqlx::Row;

        row.try_get(column)
    }
}
