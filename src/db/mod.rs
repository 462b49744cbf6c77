pub mod item;
pub mod store_service;
