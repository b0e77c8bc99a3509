//! Entry-list editing commands.

use linkstart_config::Config;
use linkstart_core::{EntryList, EntryNormalizer};
use linkstart_metadata_web::HttpMetadataFetcher;
use linkstart_protocols::{EntryStore, Group, MetadataFetcher};

async fn load(config: &Config, store: &dyn EntryStore) -> Result<EntryList, Box<dyn std::error::Error>> {
    let normalizer = EntryNormalizer::from_config(&config.placement);
    Ok(EntryList::load(store, normalizer).await?)
}

/// Print stored entries in order.
pub(crate) async fn list(config: &Config, store: &dyn EntryStore) -> Result<(), Box<dyn std::error::Error>> {
    let list = load(config, store).await?;
    if list.is_empty() {
        println!("No entries. Add one with: linkstart add <url>");
        return Ok(());
    }

    for (index, entry) in list.entries().iter().enumerate() {
        let pin = if entry.pinned { " pinned" } else { "" };
        println!("{:>3}. [{}{}] {} - {}", index, entry.group, pin, entry.title, entry.url);
    }
    Ok(())
}

pub(crate) async fn add(
    config: &Config,
    store: &dyn EntryStore,
    input: &str,
    group: Group,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load(config, store).await?;
    let fetcher = HttpMetadataFetcher::new(&config.metadata)?;

    let entry = list.add(input, group, &fetcher).await?;
    println!("Added {} ({}) to {}", entry.url, entry.title, entry.group);

    list.save(store).await?;
    Ok(())
}

pub(crate) async fn remove(config: &Config, store: &dyn EntryStore, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load(config, store).await?;
    let removed = list.remove(url)?;
    list.save(store).await?;
    println!("Removed {}", removed.url);
    Ok(())
}

pub(crate) async fn move_to(
    config: &Config,
    store: &dyn EntryStore,
    url: &str,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load(config, store).await?;
    list.move_to(url, index)?;
    list.save(store).await?;
    Ok(())
}

pub(crate) async fn set_group(
    config: &Config,
    store: &dyn EntryStore,
    url: &str,
    group: Group,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load(config, store).await?;
    list.set_group(url, group)?;
    list.save(store).await?;
    Ok(())
}

pub(crate) async fn set_pinned(
    config: &Config,
    store: &dyn EntryStore,
    url: &str,
    pinned: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load(config, store).await?;
    list.set_pinned(url, pinned)?;
    list.save(store).await?;
    Ok(())
}

/// Print the title a URL would be added with.
pub(crate) async fn fetch(config: &Config, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = EntryList::normalize_input_url(url)?;
    let fetcher = HttpMetadataFetcher::new(&config.metadata)?;
    let metadata = fetcher.fetch(&url).await?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
