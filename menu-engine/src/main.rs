use menu_engine::{GuestView, MenuStore, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. dotenv, config, logger
    let config = setup_environment()?;

    print_banner();

    tracing::info!(environment = %config.environment, "🍝 Menu engine starting...");

    // 2. Build the store
    let store = if config.seed_menu {
        MenuStore::seeded()
    } else {
        MenuStore::new()
    };
    tracing::info!("📋 Menu loaded with {} items", store.len());

    // 3. Dashboard summary
    for (course, stats) in store.stats().iter() {
        tracing::info!(
            course = %course,
            count = stats.count,
            average_price = %stats.average_price,
            "Course statistics"
        );
    }

    // 4. Guest menu from a snapshot
    let guest = GuestView::open(store.snapshot());
    if guest.is_empty() {
        tracing::info!("No menu items found. Add one!");
    }
    for item in guest.items() {
        tracing::info!(
            course = %item.course,
            price = %item.price_label(),
            "{}: {}",
            item.name,
            item.description
        );
    }

    let stats_json = serde_json::to_string(&guest.stats())?;
    tracing::debug!(stats = %stats_json, "Guest statistics");

    Ok(())
}
