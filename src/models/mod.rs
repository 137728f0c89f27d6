pub mod entry;
pub mod entry_type;
pub mod owner_config;
