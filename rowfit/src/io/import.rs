use std::collections::HashSet;

use anyhow::{Context, Result, ensure};
use log::warn;

use crate::entities::{Item, LayoutOptions};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};

/// Converts an external instance into items and layout options, validating all dimensions and keys.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<(Vec<Item>, LayoutOptions)> {
    let options = import_container(&ext_instance.container)
        .with_context(|| format!("invalid container in instance {}", ext_instance.name))?;

    let mut keys = HashSet::new();
    let items = ext_instance
        .items
        .iter()
        .map(|ext_item| {
            ensure!(
                keys.insert(ext_item.key.as_str()),
                "duplicate item key: {}",
                ext_item.key
            );
            import_item(ext_item)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((items, options))
}

pub fn import_container(ext_container: &ExtContainer) -> Result<LayoutOptions> {
    LayoutOptions::try_new(ext_container.width, ext_container.height, ext_container.gap)
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    if ext_item.row_span.is_some_and(|s| s > 1) {
        warn!(
            "item {} spans {} rows, row spanning is not supported and will be ignored",
            ext_item.key,
            ext_item.row_span.unwrap_or_default()
        );
    }
    let item = Item::try_new(ext_item.key.clone(), ext_item.width, ext_item.height)?
        .with_featured(ext_item.featured)
        .with_flexible(ext_item.flexible_aspect_ratio);
    Ok(item)
}
