use std::error::Error;

use dotenv::dotenv;
use log::{debug, initialize_logger, o};
use structopt::StructOpt;
use url::Url;

use civic::client::Client;
use civic::config::get_variable_or;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "civic-client",
    about = "Submit a civic complaint to a running server"
)]
struct Opt {
    /// The complaint, in your own words
    text: String,

    /// Your name or ID
    #[structopt(long)]
    user_id: Option<String>,

    /// The server to submit to (defaults to `CIVIC_SERVER_URL`)
    #[structopt(long, parse(try_from_str = Url::parse))]
    server: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let opt = Opt::from_args();

    let server = match opt.server {
        Some(server) => server,
        None => Url::parse(&get_variable_or(
            "CIVIC_SERVER_URL",
            "http://localhost:5000/".to_owned(),
        ))?,
    };

    let logger = initialize_logger().new(o!("server" => server.to_string()));
    debug!(logger, "Submitting complaint...");

    let client = Client::new(server);

    match client.submit(&opt.text, opt.user_id.as_deref()).await {
        Ok(receipt) => {
            println!("Complaint submitted successfully!");
            println!("Complaint ID: {}", receipt.complaint_id);
            println!("Category: {}", receipt.category);
            println!("Department: {}", receipt.department);
            println!("Status: {}", receipt.status);

            Ok(())
        }
        Err(e) => {
            debug!(logger, "Submission failed"; "error" => ?e);
            eprintln!("{}", e);

            // flush the log before exiting
            drop(logger);
            std::process::exit(1);
        }
    }
}
