//! Suggest command

use crate::output;
use anyhow::Result;
use mealdex_api_client::MealDbClient;
use mealdex_search::{best_correction, suggest, SuggestConfig};
use mealdex_session::{SearchContext, SessionConfig};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run(query: &str, limit: usize, format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let ctx = SearchContext::shared(client, SessionConfig::default());
    ctx.load_filter_values().await;

    let pool = ctx.candidate_pool();
    let config = SuggestConfig {
        max_suggestions: limit,
        ..SuggestConfig::default()
    };

    let ranked = suggest(query, &pool, &config);
    let best = best_correction(query, &pool, &config);

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "query": query,
                "best": best,
                "suggestions": ranked,
            }))?
        );
        return Ok(());
    }

    output::banner(&format!("💡 Suggestions for \"{query}\""));
    if ranked.is_empty() {
        println!("  {}", "no close matches".dimmed());
    }
    for (i, term) in ranked.iter().enumerate() {
        if best.as_deref() == Some(term.as_str()) {
            println!("  {:>3}. {}", i + 1, term.green().bold());
        } else {
            output::name_row(i + 1, term);
        }
    }
    println!();
    Ok(())
}
