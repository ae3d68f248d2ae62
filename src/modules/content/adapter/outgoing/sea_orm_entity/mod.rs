pub mod contact_messages;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod testimonials;
