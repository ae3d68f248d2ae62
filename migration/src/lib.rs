pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_projects_table;
mod m20250601_000002_create_skills_table;
mod m20250601_000003_create_experience_table;
mod m20250601_000004_create_testimonials_table;
mod m20250601_000005_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_projects_table::Migration),
            Box::new(m20250601_000002_create_skills_table::Migration),
            Box::new(m20250601_000003_create_experience_table::Migration),
            Box::new(m20250601_000004_create_testimonials_table::Migration),
            Box::new(m20250601_000005_create_contact_messages_table::Migration),
        ]
    }
}
