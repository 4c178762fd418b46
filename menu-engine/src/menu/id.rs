//! Menu item id generation

use shared::util::{menu_item_id, now_millis};

/// Hands out item ids of the form `item-{count + 1}-{millis}`.
///
/// The millisecond component is strictly increasing per generator: when the
/// wall clock has not moved past the last issued value (same tick, or a clock
/// step backwards) the previous value plus one is used instead.
#[derive(Debug, Default)]
pub struct ItemIdGenerator {
    last_millis: i64,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id using the current wall clock
    pub fn next_id(&mut self, item_count: usize) -> String {
        self.next_id_at(item_count, now_millis())
    }

    /// Next id as if the clock read `now`
    pub fn next_id_at(&mut self, item_count: usize, now: i64) -> String {
        let millis = now.max(self.last_millis.saturating_add(1));
        self.last_millis = millis;
        menu_item_id(item_count.saturating_add(1), millis)
    }
}
