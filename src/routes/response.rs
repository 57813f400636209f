use serde::Serialize;

use crate::complaint::{CategoryCount, Complaint, Receipt};

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Counts {
        counts: Vec<CategoryCount>,
    },
    Healthz {
        revision: Option<&'a str>,
        timestamp: Option<&'a str>,
        version: &'a str,
    },
    Recent {
        complaints: Vec<Complaint>,
    },
    Submit(Receipt),
}
