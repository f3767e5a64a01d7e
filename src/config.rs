/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable periodic revalidation of the prices on screen
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (10 minutes = 600,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 600_000;

    /// Path of the price lookup endpoint, relative to the API base URL
    pub const API_PATH: &'static str = "api/prices";

    /// Fuel type shown before the user picks one
    pub const DEFAULT_FUEL_TYPE: &'static str = "95";

    /// Fuel types offered by the selector
    pub const FUEL_TYPES: &'static [&'static str] = &["95", "98", "E10", "E85", "diesel", "HVO100"];
}
