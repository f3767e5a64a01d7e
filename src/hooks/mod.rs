pub mod use_prices;
pub mod use_reference_date;
