pub mod bindings;
pub mod content_store_postgres;
pub mod sea_orm_entity;
