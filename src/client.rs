use serde::Serialize;
use url::Url;
use warp::http::StatusCode;

use crate::complaint::Receipt;
use crate::errors::ClientError;
use crate::urls::Urls;

#[derive(Debug, Serialize)]
struct SubmissionBody<'a> {
    text: &'a str,
    user_id: &'a str,
}

/// Submits complaints to a running server. Each submission is a single
/// request: there are no retries and no timeout beyond the transport's.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    urls: Urls,
}

impl Client {
    pub fn new(base: Url) -> Self {
        Client {
            http: reqwest::Client::new(),
            urls: Urls::new(base),
        }
    }

    pub async fn submit(&self, text: &str, user_id: Option<&str>) -> Result<Receipt, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyComplaint);
        }

        let user_id = match user_id {
            Some(u) if !u.is_empty() => u,
            _ => crate::normalization::ANONYMOUS,
        };

        let response = self
            .http
            .post(self.urls.submit()?)
            .json(&SubmissionBody { text, user_id })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json::<Receipt>().await?)
    }
}
