use std::error::Error;
use std::sync::Arc;

use futures::future::FutureExt;
use log::{info, initialize_logger};
use tokio::sync::mpsc;
use warp::Filter;

use civic::config::get_variable_or;
use civic::db::SqliteDb;
use civic::environment::{Config, Environment};
use civic::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let main_port: u16 = get_variable_or("CIVIC_PORT", 5000);
    let admin_port: u16 = get_variable_or("CIVIC_ADMIN_PORT", 5001);
    let db_path: String = get_variable_or("CIVIC_DB_PATH", "complaints.db".to_owned());

    info!(logger, "Starting..."; "main_port" => main_port, "admin_port" => admin_port, "db_path" => &db_path);
    let logger = Arc::new(logger);

    info!(logger, "Opening database...");
    let db = SqliteDb::connect(&db_path).await?;
    db.initialize().await?;
    let db = Arc::new(db);

    let config = Config::new(get_variable_or("CIVIC_RECENT_LIMIT", 5));
    let environment = Environment::new(logger.clone(), db, config);

    let (termination_sender, mut termination_receiver) = mpsc::channel::<()>(1);

    let terminate = Arc::new(move || {
        let termination_sender = termination_sender.clone();

        async move {
            // the receiver only goes away once shutdown has begun
            let _ = termination_sender.send(()).await;
        }
        .boxed()
    });

    let should_terminate = async move {
        termination_receiver.recv().await;
    }
    .shared();

    let ctrlc = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let signal = tokio::signal::ctrl_c();

        async move {
            tokio::select! {
                _ = should_terminate => {},
                _ = signal => {
                    terminate().await;
                }
            }
        }
    };

    let main_server = {
        let should_terminate = should_terminate.clone();

        let routes = routes::make_main_routes(environment.clone());

        let (_, main_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], main_port), async {
                should_terminate.await;
            });

        main_server
    };

    let admin_server = {
        let should_terminate = should_terminate.clone();

        let routes = routes::admin::make_healthz_route()
            .or(routes::admin::make_termination_route(terminate));

        let (_, admin_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], admin_port), async {
                should_terminate.await;
            });

        admin_server
    };

    tokio::join!(ctrlc, main_server, admin_server);

    info!(logger, "Exiting gracefully...");

    Ok(())
}
