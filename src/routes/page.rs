use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use warp::http::StatusCode;

use crate::complaint::{CategoryCount, Complaint, Receipt};

/// The message shown above the form after a submission.
#[derive(Debug)]
pub enum Banner {
    Success(Receipt),
    Warning(String),
    Error(String),
}

impl Banner {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Banner::Success(_) => StatusCode::OK,
            Banner::Warning(_) => StatusCode::BAD_REQUEST,
            Banner::Error(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Everything shown on the index page. The recent list and the counts
/// carry the error message in place of the data if loading them failed.
#[derive(Debug)]
pub struct Page {
    pub text: String,
    pub user_id: String,
    pub banner: Option<Banner>,
    pub recent: Result<Vec<Complaint>, String>,
    pub counts: Result<Vec<CategoryCount>, String>,
}

impl Page {
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>CivicAI - Complaint Assistant</title>\n",
            "</head>\n<body>\n",
            "<h1>CivicAI - Smart Civic Complaint Assistant</h1>\n",
            "<p>Report issues like potholes, water leaks, garbage, and more in your own words!</p>\n",
        ));

        if let Some(banner) = &self.banner {
            render_banner(&mut html, banner);
        }

        let _ = write!(
            html,
            concat!(
                "<form method=\"post\" action=\"/\">\n",
                "<label>Your Name or ID (optional) <input type=\"text\" name=\"user_id\" value=\"{}\"></label>\n",
                "<label>Describe your complaint <textarea name=\"text\" rows=\"6\">{}</textarea></label>\n",
                "<button type=\"submit\">Submit Complaint</button>\n",
                "</form>\n",
            ),
            encode_double_quoted_attribute(&self.user_id),
            encode_text(&self.text),
        );

        html.push_str("<h2>Recent complaints</h2>\n");
        match &self.recent {
            Ok(complaints) if complaints.is_empty() => html.push_str("<p>No complaints yet.</p>\n"),
            Ok(complaints) => render_recent(&mut html, complaints),
            Err(message) => render_load_error(&mut html, message),
        }

        html.push_str("<h2>Complaints by category</h2>\n");
        match &self.counts {
            Ok(counts) if counts.is_empty() => html.push_str("<p>No complaints yet.</p>\n"),
            Ok(counts) => render_counts(&mut html, counts),
            Err(message) => render_load_error(&mut html, message),
        }

        html.push_str("</body>\n</html>\n");

        html
    }
}

fn render_banner(html: &mut String, banner: &Banner) {
    let _ = match banner {
        Banner::Success(receipt) => write!(
            html,
            concat!(
                "<div class=\"success\">\n<p>Complaint submitted successfully!</p>\n",
                "<p><strong>Complaint ID</strong>: <code>{}</code></p>\n",
                "<p><strong>Category</strong>: {}</p>\n",
                "<p><strong>Department</strong>: {}</p>\n",
                "<p><strong>Status</strong>: {}</p>\n</div>\n",
            ),
            encode_text(&receipt.complaint_id),
            encode_text(&receipt.category),
            encode_text(&receipt.department),
            encode_text(&receipt.status),
        ),
        Banner::Warning(message) => writeln!(html, "<p class=\"warning\">{}</p>", encode_text(message)),
        Banner::Error(message) => writeln!(
            html,
            "<p class=\"error\">Something went wrong: {}</p>",
            encode_text(message)
        ),
    };
}

fn render_recent(html: &mut String, complaints: &[Complaint]) {
    html.push_str(
        "<table>\n<tr><th>ID</th><th>Submitted by</th><th>Complaint</th><th>Category</th><th>Department</th><th>Status</th></tr>\n",
    );

    for complaint in complaints {
        let details = &complaint.details;
        let _ = writeln!(
            html,
            "<tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&complaint.id),
            encode_text(&details.submitter_id),
            encode_text(&details.original_text),
            encode_text(&details.category),
            encode_text(&details.department),
            encode_text(&details.status),
        );
    }

    html.push_str("</table>\n");
}

fn render_counts(html: &mut String, counts: &[CategoryCount]) {
    html.push_str("<ul>\n");

    for count in counts {
        let _ = writeln!(html, "<li>{}: {}</li>", encode_text(&count.category), count.count);
    }

    html.push_str("</ul>\n");
}

fn render_load_error(html: &mut String, message: &str) {
    let _ = writeln!(html, "<p class=\"error\">Could not load: {}</p>", encode_text(message));
}
