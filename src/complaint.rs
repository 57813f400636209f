use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::normalization;

/// The status every complaint is created with. No transitions exist.
pub const RECEIVED: &str = "Received";

/// A single complaint in the database.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Complaint {
    /// The ID of the complaint.
    pub id: String,

    /// The date and time it was received.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,

    /// Everything derived from the submission.
    #[serde(flatten)]
    pub details: NewComplaint,
}

impl Complaint {
    pub fn new(id: String, created_at: OffsetDateTime, details: NewComplaint) -> Self {
        Complaint {
            id,
            created_at,
            details,
        }
    }

    pub fn receipt(&self) -> Receipt {
        Receipt {
            complaint_id: self.id.clone(),
            category: self.details.category.clone(),
            department: self.details.department.clone(),
            status: self.details.status.clone(),
        }
    }
}

/// A complaint that has been classified and routed but not yet saved.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewComplaint {
    pub submitter_id: String,
    pub original_text: String,
    pub translated_text: String,
    pub language: String,
    pub category: String,
    pub department: String,
    pub status: String,
}

/// The body of a submission request.
#[derive(Clone, Debug, Deserialize)]
pub struct Submission {
    pub text: String,

    #[serde(default)]
    #[serde(deserialize_with = "normalization::deserialize_option")]
    pub user_id: Option<String>,
}

/// What a submitter gets back once their complaint is saved.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Receipt {
    pub complaint_id: String,
    pub category: String,
    pub department: String,
    pub status: String,
}

/// The number of complaints filed under one category.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

impl CategoryCount {
    pub fn new(category: String, count: i64) -> Self {
        Self { category, count }
    }
}
