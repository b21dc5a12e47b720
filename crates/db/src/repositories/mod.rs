//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_content_repo;
pub mod admin_user_repo;
pub mod contact_info_repo;
pub mod enquiry_repo;
pub mod project_image_repo;
pub mod project_repo;
pub mod service_repo;
pub mod site_settings_repo;
pub mod team_member_repo;

pub use about_content_repo::AboutContentRepo;
pub use admin_user_repo::AdminUserRepo;
pub use contact_info_repo::ContactInfoRepo;
pub use enquiry_repo::EnquiryRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use team_member_repo::TeamMemberRepo;
