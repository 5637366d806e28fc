//! Detail command

use crate::output;
use anyhow::Result;
use mealdex_api_client::MealDbClient;
use mealdex_session::{SearchContext, SessionConfig};

pub async fn run(id: &str, format: &str) -> Result<()> {
    let client = MealDbClient::new()?;
    let ctx = SearchContext::shared(client, SessionConfig::default());

    let detail = ctx.detail(id).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    output::meal_card(&detail);
    Ok(())
}
