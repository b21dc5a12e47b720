//! HTTP request handlers, one module per resource.

pub mod about;
pub mod auth;
pub mod contact_info;
pub mod enquiries;
pub mod gallery;
pub mod projects;
pub mod services;
pub mod settings;
pub mod team;
