pub mod about_content;
pub mod admin_user;
pub mod contact_info;
pub mod enquiry;
pub mod project;
pub mod project_image;
pub mod service;
pub mod site_settings;
pub mod team_member;
