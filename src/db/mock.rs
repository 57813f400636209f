use std::collections::BTreeMap;
use std::sync::RwLock;

use futures::future::{BoxFuture, FutureExt};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::complaint::{CategoryCount, Complaint, NewComplaint};
use crate::db::Db;
use crate::errors::BackendError;

/// An in-memory store. When `failing` is set, every operation fails
/// the way a broken database connection would.
#[derive(Default)]
pub(crate) struct MockDb {
    pub(crate) complaints: RwLock<Vec<Complaint>>,
    failing: bool,
}

impl MockDb {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing() -> Self {
        MockDb {
            failing: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), BackendError> {
        if self.failing {
            Err(BackendError::Sqlx {
                source: sqlx::Error::PoolClosed,
            })
        } else {
            Ok(())
        }
    }
}

impl Db for MockDb {
    fn count_by_category(&self) -> BoxFuture<Result<Vec<CategoryCount>, BackendError>> {
        async move {
            self.check()?;

            let mut counts = BTreeMap::new();

            for complaint in self.complaints.read().unwrap().iter() {
                *counts.entry(complaint.details.category.clone()).or_insert(0) += 1;
            }

            Ok(counts
                .into_iter()
                .map(|(category, count)| CategoryCount::new(category, count))
                .collect())
        }
        .boxed()
    }

    fn insert(&self, details: NewComplaint) -> BoxFuture<Result<Complaint, BackendError>> {
        async move {
            self.check()?;

            let complaint = Complaint::new(
                Uuid::new_v4().to_string(),
                OffsetDateTime::now_utc(),
                details,
            );
            self.complaints.write().unwrap().push(complaint.clone());

            Ok(complaint)
        }
        .boxed()
    }

    fn list_recent(&self, count: u32) -> BoxFuture<Result<Vec<Complaint>, BackendError>> {
        async move {
            self.check()?;

            Ok(self
                .complaints
                .read()
                .unwrap()
                .iter()
                .rev()
                .take(count as usize)
                .cloned()
                .collect())
        }
        .boxed()
    }

    fn retrieve(&self, id: &str) -> BoxFuture<Result<Option<Complaint>, BackendError>> {
        let id = id.to_owned();

        async move {
            self.check()?;

            Ok(self
                .complaints
                .read()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }
        .boxed()
    }
}
