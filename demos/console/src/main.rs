use crumb::manager::{CookieManager, FormField};
use crumb::store::{CookieStore, MemoryStore, SetOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = MemoryStore::new();
    store.set("existing", "from-before-mount", &SetOptions::new())?;

    let mut manager = CookieManager::mount(store)?;

    manager.on_field_change(FormField::Name, "theme");
    manager.on_field_change(FormField::Value, "light");
    manager.on_submit()?;

    manager.on_field_change(FormField::Name, "session");
    manager.on_field_change(FormField::Value, "abc123");
    manager.on_field_change(FormField::Domain, ".example.com");
    manager.on_submit()?;

    manager.on_remove("existing")?;

    println!("{}", manager.render());
    Ok(())
}
