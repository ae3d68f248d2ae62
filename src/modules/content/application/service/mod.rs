pub mod content_stats_service;
pub mod create_entry_service;
pub mod delete_entry_service;
pub mod list_entries_service;
pub mod update_entry_service;
