/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a menu item id.
///
/// Layout: `item-{ordinal}-{millis}` where `ordinal` is the 1-based position
/// the item had when it was created and `millis` is the creation timestamp.
/// The ordinal alone repeats after deletes, so uniqueness rests on callers
/// never handing out the same `millis` twice.
pub fn menu_item_id(ordinal: usize, millis: i64) -> String {
    format!("item-{ordinal}-{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_id_layout() {
        assert_eq!(menu_item_id(4, 1_700_000_000_123), "item-4-1700000000123");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
