//! Terminal client for the inventory API.
//!
//! State lives in one [`state::ClientState`] value that only changes through
//! [`state::reduce`]. [`app::InventoryApp`] makes the network calls and feeds
//! the results back in as actions; [`view::render`] draws a state.

pub mod api;
pub mod app;
pub mod command;
pub mod error;
pub mod state;
pub mod view;
