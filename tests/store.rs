use std::collections::HashSet;

use proptest::prelude::*;

use civic::complaint::CategoryCount;
use civic::db::Db;
use civic::intake;

mod common;

#[tokio::test]
async fn inserted_complaints_round_trip() {
    let (_dir, db) = common::make_db().await;

    let texts = [
        ("नल से पानी टपक रहा है", "hi"),
        ("تسرب المياه في الشارع", "ar"),
        ("Drain blocked after the rain", "en"),
    ];

    for (text, language) in texts.iter() {
        let complaint = intake::submit(&db, text, Some("ward-7"))
            .await
            .expect("save complaint");

        let stored = db
            .retrieve(&complaint.id)
            .await
            .expect("retrieve complaint")
            .expect("complaint exists");

        assert_eq!(stored, complaint);
        assert_eq!(stored.details.original_text, *text);
        assert_eq!(stored.details.language, *language);
        assert_eq!(stored.details.submitter_id, "ward-7");
    }
}

#[tokio::test]
async fn ids_are_unique() {
    let (_dir, db) = common::make_db().await;

    let mut ids = HashSet::new();

    for i in 0..20 {
        let complaint = intake::submit(&db, &format!("garbage report #{}", i), None)
            .await
            .expect("save complaint");

        assert!(ids.insert(complaint.id), "IDs must not repeat");
    }

    let recent = db.list_recent(50).await.expect("list complaints");
    assert_eq!(recent.len(), 20);
    assert_eq!(recent[0].details.original_text, "garbage report #19");
    assert_eq!(recent[19].details.original_text, "garbage report #0");
}

#[tokio::test]
async fn empty_database_has_no_counts() {
    let (_dir, db) = common::make_db().await;

    assert_eq!(db.count_by_category().await.unwrap(), vec![]);
    assert!(db.list_recent(5).await.unwrap().is_empty());
    assert_eq!(db.retrieve("missing").await.unwrap(), None);
}

#[tokio::test]
async fn counts_follow_inserts() {
    let (_dir, db) = common::make_db().await;

    for text in &["water leak", "no water since Monday", "nothing works"] {
        intake::submit(&db, text, None).await.unwrap();
    }

    assert_eq!(
        db.count_by_category().await.unwrap(),
        vec![
            CategoryCount::new("General Complaint".to_owned(), 1),
            CategoryCount::new("Water Leakage".to_owned(), 2),
        ]
    );
}

#[tokio::test]
async fn reopening_keeps_complaints() {
    let (dir, db) = common::make_db().await;

    let complaint = intake::submit(&db, "light out on Elm Road", Some("asha"))
        .await
        .unwrap();
    drop(db);

    let db = civic::db::SqliteDb::connect(dir.path().join("complaints.db"))
        .await
        .unwrap();
    db.initialize().await.unwrap();

    let stored = db.retrieve(&complaint.id).await.unwrap();
    assert_eq!(stored, Some(complaint));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, ..ProptestConfig::default()
    })]

    #[test]
    fn text_and_submitter_survive_storage(text in "\\s*\\S\\PC*", submitter in "\\PC*") {
        let runtime = tokio::runtime::Runtime::new().expect("create runtime");

        let (stored, expected_submitter) = runtime.block_on(async {
            let (_dir, db) = common::make_db().await;
            let complaint = intake::submit(&db, &text, Some(&submitter)).await.expect("save complaint");

            let expected_submitter = if submitter.trim().is_empty() {
                "anonymous".to_owned()
            } else {
                submitter.clone()
            };

            (db.retrieve(&complaint.id).await.expect("retrieve complaint"), expected_submitter)
        });

        let stored = stored.expect("complaint exists");
        prop_assert_eq!(&stored.details.original_text, &text);
        prop_assert_eq!(&stored.details.translated_text, &text);
        prop_assert_eq!(stored.details.submitter_id, expected_submitter);
    }
}
