pub mod admin_scope;
pub mod dashboard;
