pub mod error;
pub mod item;
pub mod response;
