use std::time::{Duration, Instant};

use bytes::Bytes;
use log::{debug, error, o};
use warp::{
    http::StatusCode,
    reject,
    reply::{html, json, with_header, with_status, Reply},
};

use crate::complaint::{Complaint, Submission};
use crate::environment::{Environment, MAX_RECENT_LIMIT};
use crate::errors::BackendError;
use crate::intake;
use crate::routes::{
    page::{Banner, Page},
    query::{FormSubmission, RecentQuery},
    rejection::{Context, Rejection},
    response::SuccessResponse,
};

const SERVER_TIMING_HEADER: &str = "server-timing";
type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

macro_rules! timed {
    ($($body:tt)+) => {
        let start = Instant::now();

        // TODO when `try` blocks are stabilized, we can wrap the body
        // and return the headers even on errors
        let result = { $($body)+ };

        Ok(Box::new(with_header(
            result,
            SERVER_TIMING_HEADER,
            format_server_timing(start.elapsed()),
        )) as Box<dyn Reply>)
    };
}

pub async fn submit(environment: Environment, body: Bytes) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::submit(), e);

        debug!(environment.logger, "Parsing submission...");
        let submission: Submission = serde_json::from_slice(&body)
            .map_err(BackendError::MalformedSubmission)
            .map_err(error_handler)?;

        debug!(environment.logger, "Saving complaint...");
        let complaint = save(&environment, &submission.text, submission.user_id.as_deref())
            .await
            .map_err(error_handler)?;

        with_status(json(&SuccessResponse::Submit(complaint.receipt())), StatusCode::OK)
    }
}

pub async fn recent(environment: Environment, query: RecentQuery) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::recent(query.limit), e);

        let limit = query.limit.unwrap_or(environment.config.recent_limit);

        if limit > MAX_RECENT_LIMIT {
            return Err(error_handler(BackendError::InvalidLimit(limit)).into());
        }

        let complaints = environment
            .db
            .list_recent(limit)
            .await
            .map_err(error_handler)?;

        json(&SuccessResponse::Recent { complaints })
    }
}

pub async fn counts(environment: Environment) -> RouteResult {
    timed! {
        let counts = environment
            .db
            .count_by_category()
            .await
            .map_err(|e: BackendError| Rejection::new(Context::counts(), e))?;

        json(&SuccessResponse::Counts { counts })
    }
}

pub async fn retrieve(environment: Environment, id: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::retrieve(id.clone()), e);

        debug!(environment.logger, "Retrieving complaint..."; "id" => &id);
        let option = environment.db.retrieve(&id).await.map_err(error_handler)?;

        match option {
            Some(complaint) => with_status(json(&complaint), StatusCode::OK),
            None => with_status(json(&()), StatusCode::NOT_FOUND),
        }
    }
}

pub async fn page(environment: Environment) -> RouteResult {
    timed! {
        let page = load_page(&environment, FormSubmission::default(), None).await;

        html(page.render())
    }
}

pub async fn page_submit(environment: Environment, form: FormSubmission) -> RouteResult {
    timed! {
        let banner = match save(&environment, &form.text, form.user_id.as_deref()).await {
            Ok(complaint) => Banner::Success(complaint.receipt()),
            Err(e @ BackendError::EmptyComplaint) => Banner::Warning(e.to_string()),
            Err(e) => {
                error!(environment.logger, "Failed to save complaint"; "error" => ?e);
                Banner::Error(e.to_string())
            }
        };

        let status = banner.status_code();

        // a saved complaint clears the form; anything else keeps it for editing
        let form = match banner {
            Banner::Success(_) => FormSubmission::default(),
            _ => form,
        };

        let page = load_page(&environment, form, Some(banner)).await;

        with_status(html(page.render()), status)
    }
}

async fn save(
    environment: &Environment,
    text: &str,
    user_id: Option<&str>,
) -> Result<Complaint, BackendError> {
    let complaint = intake::submit(environment.db.as_ref(), text, user_id).await?;

    let logger = environment.logger.new(o!("id" => complaint.id.clone()));
    debug!(logger, "Saved complaint";
        "category" => &complaint.details.category,
        "department" => &complaint.details.department,
        "language" => &complaint.details.language);

    Ok(complaint)
}

async fn load_page(
    environment: &Environment,
    form: FormSubmission,
    banner: Option<Banner>,
) -> Page {
    let log_error = |e: BackendError| {
        error!(environment.logger, "Failed to load page data"; "error" => ?e);
        e.to_string()
    };

    let recent = environment
        .db
        .list_recent(environment.config.recent_limit)
        .await
        .map_err(&log_error);
    let counts = environment
        .db
        .count_by_category()
        .await
        .map_err(&log_error);

    Page {
        text: form.text,
        user_id: form.user_id.unwrap_or_default(),
        banner,
        recent,
        counts,
    }
}

fn format_server_timing(seconds: Duration) -> String {
    format!("handler;dur={}", seconds.as_secs_f64() * 1000.0)
}
