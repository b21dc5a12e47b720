//! Integration tests for the enquiry lifecycle.
//!
//! Enquiries start unforwarded, transition to forwarded exactly once, and
//! are listed newest first.

use sqlx::PgPool;
use arcsite_db::models::enquiry::SubmitEnquiry;
use arcsite_db::repositories::EnquiryRepo;

fn submission(name: &str) -> SubmitEnquiry {
    SubmitEnquiry {
        name: name.to_string(),
        email: "a@b.com".to_string(),
        phone: "123".to_string(),
        project_type: "Villa".to_string(),
        location: "Dubai".to_string(),
        budget: None,
        timeline: None,
        message: None,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_starts_unforwarded(pool: PgPool) {
    let enquiry = EnquiryRepo::create(&pool, &submission("A"))
        .await
        .expect("create enquiry");

    assert!(!enquiry.webhook_sent);
    assert!(enquiry.webhook_response.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn mark_forwarded_is_one_way(pool: PgPool) {
    let enquiry = EnquiryRepo::create(&pool, &submission("A"))
        .await
        .expect("create enquiry");

    let updated = EnquiryRepo::mark_forwarded(&pool, enquiry.id, "Webhook request sent successfully")
        .await
        .expect("mark forwarded")
        .expect("row updated");
    assert!(updated.webhook_sent);
    assert_eq!(
        updated.webhook_response.as_deref(),
        Some("Webhook request sent successfully")
    );

    // A second attempt must not match the guard.
    let second = EnquiryRepo::mark_forwarded(&pool, enquiry.id, "again")
        .await
        .expect("second mark");
    assert!(second.is_none());

    let reloaded = EnquiryRepo::find_by_id(&pool, enquiry.id)
        .await
        .expect("reload")
        .expect("exists");
    assert_eq!(
        reloaded.webhook_response.as_deref(),
        Some("Webhook request sent successfully")
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_is_newest_first_and_respects_limit(pool: PgPool) {
    for name in ["first", "second", "third"] {
        EnquiryRepo::create(&pool, &submission(name))
            .await
            .expect("create enquiry");
    }

    let all = EnquiryRepo::list(&pool, None).await.expect("list all");
    assert_eq!(all.len(), 3);
    assert!(all[0].id > all[1].id && all[1].id > all[2].id);

    let limited = EnquiryRepo::list(&pool, Some(2)).await.expect("list limited");
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, all[0].id);
}
