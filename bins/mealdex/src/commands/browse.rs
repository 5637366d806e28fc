//! Random, trending, and vocabulary listing commands

use crate::output;
use anyhow::Result;
use mealdex_api_client::MealDbClient;
use mealdex_core::gateway::MealGateway;
use mealdex_session::{SearchContext, SessionConfig};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_random(format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let pick = client.random_pick().await?;

    // The random endpoint only yields a summary shape; fetch the full card.
    match client.lookup_by_id(&pick.id).await? {
        Some(detail) => {
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                output::meal_card(&detail);
            }
        }
        None => {
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&pick)?);
            } else {
                output::banner("🎲 Random Meal");
                output::meal_row(1, &pick);
                println!();
            }
        }
    }
    Ok(())
}

pub async fn run_trending(count: usize, format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let config = SessionConfig::default().with_trending_picks(count);
    let ctx = SearchContext::shared(client, config);
    ctx.refresh_trending().await;

    let trending = ctx.trending();
    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "meals": trending }))?
        );
        return Ok(());
    }

    output::banner("🔥 Trending Meals");
    if trending.is_empty() {
        println!("  {}", "nothing to show, try again later".dimmed());
    }
    for (i, meal) in trending.iter().enumerate() {
        output::meal_row(i + 1, meal);
    }
    println!();
    Ok(())
}

pub async fn run_categories(format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let names = client.list_categories().await?;
    print_names("📂 Categories", &names, format)
}

pub async fn run_areas(format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let names = client.list_areas().await?;
    print_names("🌍 Cuisines", &names, format)
}

fn print_names(title: &str, names: &[String], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&json!({ "names": names }))?);
        return Ok(());
    }

    output::banner(title);
    for (i, name) in names.iter().enumerate() {
        output::name_row(i + 1, name);
    }
    println!();
    Ok(())
}
