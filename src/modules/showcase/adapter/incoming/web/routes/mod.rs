pub mod get_about;
pub mod get_home;
pub mod get_projects;
pub mod submit_contact;
