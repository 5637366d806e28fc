//! Favorites commands, backed by a local JSON store

use crate::output;
use anyhow::{Context, Result};
use mealdex_api_client::MealDbClient;
use mealdex_core::gateway::MealGateway;
use mealdex_core::storage::{Favorites, JsonFileStore};
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::warn;

fn open() -> Result<Favorites> {
    let path = JsonFileStore::default_path();
    Favorites::load(Box::new(JsonFileStore::new(&path)))
        .with_context(|| format!("opening favorites store at {}", path.display()))
}

pub async fn run_add(id: &str, format: &str) -> Result<()> {
    let favorites = open()?;
    let added = favorites.add(id)?;
    report(id, added, "added", "already a favorite", format)
}

pub async fn run_remove(id: &str, format: &str) -> Result<()> {
    let favorites = open()?;
    let removed = favorites.remove(id)?;
    report(id, removed, "removed", "was not a favorite", format)
}

pub async fn run_toggle(id: &str, format: &str) -> Result<()> {
    let favorites = open()?;
    let now_favorite = favorites.toggle(id)?;
    report(id, now_favorite, "added", "removed", format)
}

pub async fn run_list(format: &str) -> Result<()> {
    let favorites = open()?;
    let ids = favorites.ids();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&json!({ "ids": ids }))?);
        return Ok(());
    }

    output::banner("⭐ Favorites");
    if ids.is_empty() {
        println!("  {}", "no favorites yet".dimmed());
        println!();
        return Ok(());
    }

    // Resolve names for display; a lookup failure falls back to the bare id.
    let client = MealDbClient::new()?;
    for (i, id) in ids.iter().enumerate() {
        match client.lookup_by_id(id).await {
            Ok(Some(detail)) => output::meal_row(i + 1, &detail.summary()),
            Ok(None) => println!("  {:>3}. {}", i + 1, format!("#{id}").dimmed()),
            Err(err) => {
                warn!(id = %id, error = %err, "favorite lookup failed, showing the bare id");
                println!("  {:>3}. {}", i + 1, format!("#{id}").dimmed());
            }
        }
    }
    println!();
    Ok(())
}

fn report(id: &str, changed: bool, yes: &str, no: &str, format: &str) -> Result<()> {
    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "id": id, "changed": changed }))?
        );
        return Ok(());
    }

    if changed {
        println!("{} #{id} {yes}", "✓".green());
    } else {
        println!("{} #{id} {no}", "·".dimmed());
    }
    Ok(())
}
