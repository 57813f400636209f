//! Turns raw complaint text into a stored, classified complaint.

use crate::classify::classify;
use crate::complaint::{Complaint, NewComplaint, RECEIVED};
use crate::db::Db;
use crate::errors::BackendError;
use crate::language::detect_and_translate;
use crate::normalization::submitter_or_anonymous;

/// Validates `text` and runs it through language detection,
/// classification and routing. Nothing is saved.
pub fn prepare(text: &str, user_id: Option<&str>) -> Result<NewComplaint, BackendError> {
    if text.trim().is_empty() {
        return Err(BackendError::EmptyComplaint);
    }

    let translation = detect_and_translate(text);
    let category = classify(&translation.text);
    let department = category.department();

    Ok(NewComplaint {
        submitter_id: submitter_or_anonymous(user_id),
        original_text: text.to_owned(),
        translated_text: translation.text,
        language: translation.language.code().to_owned(),
        category: category.label().to_owned(),
        department: department.label().to_owned(),
        status: RECEIVED.to_owned(),
    })
}

/// Prepares a complaint and saves it.
pub async fn submit(
    db: &(dyn Db + Send + Sync),
    text: &str,
    user_id: Option<&str>,
) -> Result<Complaint, BackendError> {
    let details = prepare(text, user_id)?;

    db.insert(details).await
}

#[cfg(test)]
mod tests {
    use super::{prepare, submit};
    use crate::db::mock::MockDb;
    use crate::errors::BackendError;

    #[test]
    fn blank_text_is_rejected() {
        for text in &["", "   ", "\n\t"] {
            assert!(matches!(
                prepare(text, None),
                Err(BackendError::EmptyComplaint)
            ));
        }
    }

    #[test]
    fn pothole_goes_to_road_maintenance() {
        let details = prepare("There is a pothole on Main Street", Some("resident-12")).unwrap();

        assert_eq!(details.category, "Road/Pothole");
        assert_eq!(details.department, "Road Maintenance");
        assert_eq!(details.status, "Received");
        assert_eq!(details.language, "en");
        assert_eq!(details.submitter_id, "resident-12");
        assert_eq!(details.translated_text, details.original_text);
    }

    #[test]
    fn unmatched_text_goes_to_general_admin() {
        let details = prepare("The mayor's office is unresponsive", Some("")).unwrap();

        assert_eq!(details.category, "General Complaint");
        assert_eq!(details.department, "General Admin");
        assert_eq!(details.submitter_id, "anonymous");
    }

    #[test]
    fn hindi_text_is_tagged() {
        let details = prepare("नल से water टपक रहा है", None).unwrap();

        assert_eq!(details.language, "hi");
        assert_eq!(details.category, "Water Leakage");
    }

    #[tokio::test]
    async fn rejected_complaints_are_not_saved() {
        let db = MockDb::new();

        let result = submit(&db, "  ", Some("someone")).await;

        assert!(matches!(result, Err(BackendError::EmptyComplaint)));
        assert!(db.complaints.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failures_yield_no_id() {
        let db = MockDb::failing();

        let result = submit(&db, "garbage everywhere", None).await;

        assert!(matches!(result, Err(BackendError::Sqlx { .. })));
    }
}
