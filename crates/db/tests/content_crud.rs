//! Integration tests for site content repositories: services, single-row
//! about/contact content, team member ordering, and the settings store.

use sqlx::PgPool;
use arcsite_db::models::about_content::UpdateAboutContent;
use arcsite_db::models::contact_info::UpdateContactInfo;
use arcsite_db::models::service::{CreateService, UpdateService};
use arcsite_db::models::site_settings::UpdateSiteSettings;
use arcsite_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use arcsite_db::repositories::{
    AboutContentRepo, ContactInfoRepo, ServiceRepo, SiteSettingsRepo, TeamMemberRepo,
};

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn service_crud_roundtrip(pool: PgPool) {
    let service = ServiceRepo::create(
        &pool,
        &CreateService {
            title: "Interior Design".to_string(),
            description: "Full-service design".to_string(),
            icon_name: "palette".to_string(),
        },
    )
    .await
    .expect("create service");

    let updated = ServiceRepo::update(
        &pool,
        service.id,
        &UpdateService {
            title: Some("Interior Architecture".to_string()),
            description: None,
            icon_name: None,
        },
    )
    .await
    .expect("update service")
    .expect("service exists");

    assert_eq!(updated.title, "Interior Architecture");
    // Untouched fields survive the partial update.
    assert_eq!(updated.description, "Full-service design");

    assert!(ServiceRepo::delete(&pool, service.id).await.expect("delete"));
    assert!(ServiceRepo::find_by_id(&pool, service.id)
        .await
        .expect("find")
        .is_none());
}

// ---------------------------------------------------------------------------
// Single-row content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn about_content_upsert_creates_then_updates(pool: PgPool) {
    assert!(AboutContentRepo::get(&pool).await.expect("get").is_none());

    let created = AboutContentRepo::upsert(
        &pool,
        &UpdateAboutContent {
            title: Some("About Us".to_string()),
            content: Some("We design spaces.".to_string()),
        },
    )
    .await
    .expect("first upsert");

    let updated = AboutContentRepo::upsert(
        &pool,
        &UpdateAboutContent {
            title: None,
            content: Some("We design luxury spaces.".to_string()),
        },
    )
    .await
    .expect("second upsert");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "About Us");
    assert_eq!(updated.content, "We design luxury spaces.");
}

#[sqlx::test(migrations = "../../migrations")]
async fn contact_info_upsert_creates_then_updates(pool: PgPool) {
    let created = ContactInfoRepo::upsert(
        &pool,
        &UpdateContactInfo {
            address: Some("Business Bay, Dubai".to_string()),
            phone: Some("+971 50 123 4567".to_string()),
            email: Some("hello@example.ae".to_string()),
        },
    )
    .await
    .expect("first upsert");

    let updated = ContactInfoRepo::upsert(
        &pool,
        &UpdateContactInfo {
            address: None,
            phone: Some("+971 50 987 6543".to_string()),
            email: None,
        },
    )
    .await
    .expect("second upsert");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address, "Business Bay, Dubai");
    assert_eq!(updated.phone, "+971 50 987 6543");
}

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn team_members_list_in_display_order(pool: PgPool) {
    let member = |name: &str, order: Option<i32>| CreateTeamMember {
        name: name.to_string(),
        designation: "Designer".to_string(),
        bio: None,
        image_url: None,
        order_index: order,
    };

    TeamMemberRepo::create(&pool, &member("B", Some(1)))
        .await
        .expect("create B");
    TeamMemberRepo::create(&pool, &member("A", Some(0)))
        .await
        .expect("create A");
    // No explicit order: appended after the current maximum.
    let appended = TeamMemberRepo::create(&pool, &member("C", None))
        .await
        .expect("create C");
    assert_eq!(appended.order_index, 2);

    let listed = TeamMemberRepo::list(&pool).await.expect("list");
    let names: Vec<&str> = listed.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    let moved = TeamMemberRepo::update(
        &pool,
        appended.id,
        &UpdateTeamMember {
            name: None,
            designation: None,
            bio: None,
            image_url: None,
            order_index: Some(-1),
        },
    )
    .await
    .expect("update order")
    .expect("member exists");
    assert_eq!(moved.order_index, -1);

    let listed = TeamMemberRepo::list(&pool).await.expect("list again");
    assert_eq!(listed[0].name, "C");
}

// ---------------------------------------------------------------------------
// Settings store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn settings_row_is_seeded_and_updatable(pool: PgPool) {
    // The migration seeds an empty settings row.
    assert!(SiteSettingsRepo::webhook_url(&pool)
        .await
        .expect("webhook url")
        .is_none());

    SiteSettingsRepo::update(
        &pool,
        &UpdateSiteSettings {
            crm_webhook_url: Some("https://crm.example.com/hook".to_string()),
        },
    )
    .await
    .expect("set url");

    assert_eq!(
        SiteSettingsRepo::webhook_url(&pool).await.expect("webhook url"),
        Some("https://crm.example.com/hook".to_string())
    );

    // Clearing the URL disables forwarding again.
    SiteSettingsRepo::update(&pool, &UpdateSiteSettings { crm_webhook_url: None })
        .await
        .expect("clear url");
    assert!(SiteSettingsRepo::webhook_url(&pool)
        .await
        .expect("webhook url")
        .is_none());

    // Blank values count as unset too.
    SiteSettingsRepo::update(
        &pool,
        &UpdateSiteSettings {
            crm_webhook_url: Some("   ".to_string()),
        },
    )
    .await
    .expect("blank url");
    assert!(SiteSettingsRepo::webhook_url(&pool)
        .await
        .expect("webhook url")
        .is_none());
}
