//! Search command

use crate::output;
use anyhow::{bail, Result};
use mealdex_api_client::MealDbClient;
use mealdex_core::model::FilterSet;
use mealdex_session::{
    page, page_count, sort_by_name, SearchContext, SearchSession, SearchState, SessionConfig,
    SortOrder,
};
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::debug;

pub async fn run(
    query: &str,
    category: Option<&str>,
    area: Option<&str>,
    page_no: usize,
    per_page: usize,
    sort: SortOrder,
    format: &str,
) -> Result<()> {
    let client = MealDbClient::new()?;
    let config = SessionConfig::default().with_per_page(per_page);
    let ctx = SearchContext::shared(client, config);

    let mut filters = FilterSet::parse(query);
    if let Some(category) = category {
        filters = filters.with_category(category);
    }
    if let Some(area) = area {
        filters = filters.with_area(area);
    }

    debug!(
        query = filters.raw_query(),
        category = ?filters.category,
        area = ?filters.area,
        page = page_no,
        "dispatching search"
    );

    // Empty filters fall back to the trending set; non-empty searches load
    // the category and area vocabularies so corrections have a richer pool.
    if filters.is_empty() {
        ctx.refresh_trending().await;
    } else {
        ctx.load_filter_values().await;
    }

    let session = SearchSession::new(ctx);
    session.set_sort(sort);

    match session.search(&filters).await {
        SearchState::Succeeded(mut results) => {
            sort_by_name(&mut results, sort);
            let pages = page_count(results.len(), per_page);
            let shown = page(&results, page_no, per_page);

            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "status": "ok",
                        "total": results.len(),
                        "page": page_no,
                        "pages": pages,
                        "meals": shown,
                    }))?
                );
                return Ok(());
            }

            let title = if filters.is_empty() {
                "🔥 Trending Meals".to_string()
            } else {
                format!("🔎 Results for \"{}\"", filters.raw_query())
            };
            output::banner(&title);
            if shown.is_empty() {
                println!("  {}", "nothing on this page".dimmed());
            }
            let offset = page_no.max(1).saturating_sub(1) * per_page;
            for (i, meal) in shown.iter().enumerate() {
                output::meal_row(offset + i + 1, meal);
            }
            output::page_footer(page_no, pages, results.len());
            Ok(())
        }

        SearchState::EmptyWithSuggestion { query, suggestion } => {
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "status": "empty",
                        "query": query,
                        "suggestion": suggestion,
                    }))?
                );
                return Ok(());
            }
            println!();
            println!("  No meals match \"{query}\".");
            println!(
                "  Did you mean {}? Try: mealdex search \"{}\"",
                suggestion.green().bold(),
                suggestion
            );
            Ok(())
        }

        SearchState::EmptyNoSuggestion => {
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "status": "empty" }))?
                );
                return Ok(());
            }
            println!();
            println!("  No meals match \"{}\".", filters.raw_query());
            Ok(())
        }

        SearchState::Failed => bail!("search failed; re-run with --verbose for details"),

        SearchState::Idle | SearchState::Searching => bail!("search did not settle"),
    }
}
