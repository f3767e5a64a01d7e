use super::cache_key::CacheKey;
use super::prices::{PriceRecord, PriceResponse, PriceSlot};
use std::rc::Rc;
use yew::functional::Reducible;

/// Which slot, if any, has its revision history expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChangeTracker {
    #[default]
    Collapsed,
    Expanded { slot: PriceSlot, key: CacheKey },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    /// User clicked a slot of the prices shown for `key`.
    Toggle {
        slot: PriceSlot,
        prices: Rc<PriceResponse>,
        key: CacheKey,
    },
    /// Fuel type or reference date changed.
    Reset,
}

impl ChangeTracker {
    /// Expands `slot`, or collapses it when it is already expanded.
    /// Missing records and records without revisions are ignored.
    pub fn toggle(&self, slot: PriceSlot, record: Option<&PriceRecord>, key: &CacheKey) -> Self {
        if !record.is_some_and(PriceRecord::has_changed) {
            return self.clone();
        }
        match self {
            Self::Expanded { slot: current, key: current_key }
                if *current == slot && current_key == key =>
            {
                Self::Collapsed
            }
            _ => Self::Expanded {
                slot,
                key: key.clone(),
            },
        }
    }

    pub fn reset(&self) -> Self {
        Self::Collapsed
    }

    /// Expanded slot for `key`. An expansion made under another key is
    /// reported as collapsed even before the reset lands.
    pub fn expanded(&self, key: &CacheKey) -> Option<PriceSlot> {
        match self {
            Self::Expanded { slot, key: expanded_key } if expanded_key == key => Some(*slot),
            _ => None,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

impl Reducible for ChangeTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TrackerAction::Toggle { slot, prices, key } => {
                self.toggle(slot, prices.record(slot), &key)
            }
            TrackerAction::Reset => self.reset(),
        };

        if next == *self { self } else { Rc::new(next) }
    }
}
