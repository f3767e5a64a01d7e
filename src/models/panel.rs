use super::cache_key::CacheKey;
use super::change_tracker::ChangeTracker;
use super::prices::{PriceRecord, PriceResponse, PriceSlot, format_price};

/// Placeholder for a slot the service has no price for
pub const UNKNOWN_PRICE: &str = "Unknown price";

/// Render model of one slot card.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub slot: PriceSlot,
    pub record: Option<PriceRecord>,
    pub has_changed: bool,
    pub expanded: bool,
}

impl SlotView {
    pub fn price_label(&self) -> String {
        self.record
            .as_ref()
            .map_or_else(|| UNKNOWN_PRICE.to_string(), |r| format_price(r.price))
    }

    /// Only slots with revisions react to clicks.
    pub fn is_clickable(&self) -> bool {
        self.has_changed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub detected_at: String,
    pub price: String,
}

/// Revision table of the expanded slot.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub slot: PriceSlot,
    pub rows: Vec<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub slots: [SlotView; 3],
    pub history: Option<HistoryView>,
    pub message: Option<String>,
}

impl PanelView {
    pub fn compose(response: &PriceResponse, tracker: &ChangeTracker, key: &CacheKey) -> Self {
        let expanded = tracker.expanded(key);

        let slots = PriceSlot::ALL.map(|slot| {
            let record = response.record(slot).cloned();
            let has_changed = record.as_ref().is_some_and(PriceRecord::has_changed);
            SlotView {
                slot,
                record,
                has_changed,
                expanded: has_changed && expanded == Some(slot),
            }
        });

        // A slot whose revisions vanished on revalidation shows no table.
        let history = slots
            .iter()
            .find(|view| view.expanded)
            .and_then(|view| view.record.as_ref().map(|record| (view.slot, record)))
            .map(|(slot, record)| HistoryView {
                slot,
                rows: record
                    .prev_prices
                    .iter()
                    .map(|revision| HistoryRow {
                        detected_at: revision.detected_at_label(),
                        price: format_price(revision.price),
                    })
                    .collect(),
            });

        let message = Some(response.message.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Self {
            slots,
            history,
            message,
        }
    }

    pub fn slot(&self, slot: PriceSlot) -> &SlotView {
        &self.slots[slot as usize]
    }
}
