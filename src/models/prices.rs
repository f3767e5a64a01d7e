use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Display format for revision detection timestamps
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One of the three days shown around the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriceSlot {
    Yesterday,
    Today,
    Tomorrow,
}

impl PriceSlot {
    /// All slots in display order.
    pub const ALL: [Self; 3] = [Self::Yesterday, Self::Today, Self::Tomorrow];

    /// Returns human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PriceSlot::Yesterday => "Yesterday",
            PriceSlot::Today => "Today",
            PriceSlot::Tomorrow => "Tomorrow",
        }
    }

    /// Returns CSS class name for the slot card
    pub fn css_class(&self) -> &'static str {
        match self {
            PriceSlot::Yesterday => "price-slot yesterday",
            PriceSlot::Today => "price-slot today",
            PriceSlot::Tomorrow => "price-slot tomorrow",
        }
    }
}

/// A price that was replaced, and when the replacement was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub detection_timestamp: DateTime<Utc>,
    pub price: f64,
}

impl Revision {
    pub fn detected_at_label(&self) -> String {
        self.detection_timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Price of one fuel type on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub price: f64,

    /// Earlier prices in detection order. Non-empty means the price was
    /// revised after it was first published.
    #[serde(default)]
    pub prev_prices: Vec<Revision>,
}

impl PriceRecord {
    pub fn has_changed(&self) -> bool {
        !self.prev_prices.is_empty()
    }
}

/// The three-slot bundle returned for one cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    #[serde(default)]
    pub message: String,
    pub prices: SlotPrices,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotPrices {
    #[serde(default)]
    pub yesterday: Option<PriceRecord>,
    #[serde(default)]
    pub today: Option<PriceRecord>,
    #[serde(default)]
    pub tomorrow: Option<PriceRecord>,
}

impl PriceResponse {
    /// Returns the record for a slot, `None` when the service has no data.
    pub fn record(&self, slot: PriceSlot) -> Option<&PriceRecord> {
        match slot {
            PriceSlot::Yesterday => self.prices.yesterday.as_ref(),
            PriceSlot::Today => self.prices.today.as_ref(),
            PriceSlot::Tomorrow => self.prices.tomorrow.as_ref(),
        }
    }

    pub fn has_changed(&self, slot: PriceSlot) -> bool {
        self.record(slot).is_some_and(PriceRecord::has_changed)
    }
}

/// Formats a price the way the panel shows it
pub fn format_price(price: f64) -> String {
    format!("{price:.2} kr")
}
