pub mod day_navigator;
pub mod fuel_selector;
pub mod price_panel;
pub mod price_slot;
pub mod revision_table;
pub mod status;

pub use fuel_selector::FuelSelector;
pub use price_panel::PricePanel;
