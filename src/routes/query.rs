use serde::Deserialize;

use crate::normalization;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

/// The fields of the complaint form on the index page.
#[derive(Debug, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    #[serde(deserialize_with = "normalization::deserialize_option")]
    pub user_id: Option<String>,
}
