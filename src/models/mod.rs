pub mod cache_key;
pub mod change_tracker;
pub mod date_window;
pub mod error;
pub mod panel;
pub mod prices;
