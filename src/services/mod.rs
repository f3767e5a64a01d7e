pub mod api;
pub mod price_store;
pub mod url_sync;
