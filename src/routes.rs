use std::sync::Arc;

use log::{error, Logger};
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, Reply, WithStatus};
use warp::Filter;

use crate::environment::Environment;
use crate::errors::BackendError;

pub mod admin;
mod handlers;
mod page;
mod query;
mod rejection;
mod response;

pub use internal::*;

/// The maximum body size to accept. Complaints are short, so anything
/// larger is refused before it is read.
const MAX_CONTENT_LENGTH: u64 = 64 * 1024;

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        error!(logger, "Request failed"; "context" => ?r.context, "error" => ?r.error, "status" => %status_code_for(e), "message" => %r.error);
        let flattened = r.flatten();

        return Ok(with_status(json(&flattened), status_code_for(e)));
    }

    Err(rej)
}

/// Combines every route served on the main port, with errors turned
/// into JSON responses.
pub fn make_main_routes(
    environment: Environment,
) -> impl Filter<Extract = (impl Reply,), Error = reject::Rejection> + Clone {
    let logger = environment.logger.clone();

    make_page_route(environment.clone())
        .or(make_page_submit_route(environment.clone()))
        .or(make_submit_route(environment.clone()))
        .or(make_recent_route(environment.clone()))
        .or(make_counts_route(environment.clone()))
        .or(make_retrieve_route(environment))
        .recover(move |r| format_rejection(logger.clone(), r))
}

fn status_code_for(e: &BackendError) -> StatusCode {
    use BackendError::*;

    match e {
        EmptyComplaint | MalformedSubmission(..) | InvalidLimit(..) => StatusCode::BAD_REQUEST,
        Sqlx { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

mod internal {
    use warp::body::{bytes, content_length_limit, form};
    use warp::filters::BoxedFilter;
    use warp::path::end;
    use warp::Filter;
    use warp::Reply;
    use warp::{get as g, path as p, path::param as par, post, query};

    use super::{handlers, query as q, MAX_CONTENT_LENGTH};
    use crate::environment::Environment;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    macro_rules! route_filter {
    ($route_variable:ident; $first:expr) => (let $route_variable = $route_variable.and($first););
    ($route_variable:ident; $first:expr, $($rest:expr),+) => (
        let $route_variable = $route_variable.and($first);
        route_filter!($route_variable; $($rest),+);
    )
}

    macro_rules! route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let $route_variable = warp::any()
                .map(move || environment.clone());

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    route!(make_page_route => page, rt; end(), g());
    route!(make_page_submit_route => page_submit, rt; end(), post(), content_length_limit(MAX_CONTENT_LENGTH), form::<q::FormSubmission>());
    route!(make_submit_route => submit, rt; p("submit"), end(), post(), content_length_limit(MAX_CONTENT_LENGTH), bytes());
    route!(make_recent_route => recent, rt; p("complaints"), p("recent"), end(), g(), query::<q::RecentQuery>());
    route!(make_counts_route => counts, rt; p("complaints"), p("counts"), end(), g());
    route!(make_retrieve_route => retrieve, rt; p("complaints"), p("id"), par::<String>(), end(), g());
}
