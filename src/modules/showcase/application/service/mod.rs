pub mod get_about_content_service;
pub mod get_home_content_service;
