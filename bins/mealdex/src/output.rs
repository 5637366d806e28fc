//! Shared terminal output helpers

use mealdex_core::model::{MealDetail, MealSummary};
use owo_colors::OwoColorize;

const RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Print a section banner in the house style.
pub fn banner(title: &str) {
    println!();
    println!("{}", RULE.blue());
    println!("  {}", title.blue().bold());
    println!("{}", RULE.blue());
    println!();
}

/// One numbered result row.
pub fn meal_row(index: usize, meal: &MealSummary) {
    println!("  {:>3}. {} {}", index, meal.name.bold(), format!("(#{})", meal.id).dimmed());
}

/// A plain numbered name row, for category/area listings.
pub fn name_row(index: usize, name: &str) {
    println!("  {index:>3}. {name}");
}

/// Full recipe card.
pub fn meal_card(detail: &MealDetail) {
    banner(&format!("🍽️  {}", detail.name));

    if let Some(category) = &detail.category {
        println!("  {}  {}", "Category:".dimmed(), category);
    }
    if let Some(area) = &detail.area {
        println!("  {}      {}", "Area:".dimmed(), area);
    }
    if let Some(source) = &detail.source_url {
        println!("  {}    {}", "Source:".dimmed(), source.underline());
    }
    if let Some(video) = &detail.video_url {
        println!("  {}     {}", "Video:".dimmed(), video.underline());
    }

    if !detail.ingredients.is_empty() {
        println!();
        println!("  {}", "Ingredients".green().bold());
        for line in &detail.ingredients {
            match &line.measure {
                Some(measure) => println!("    • {} {}", measure.dimmed(), line.name),
                None => println!("    • {}", line.name),
            }
        }
    }

    if let Some(instructions) = &detail.instructions {
        println!();
        println!("  {}", "Instructions".green().bold());
        for paragraph in instructions.lines().filter(|l| !l.trim().is_empty()) {
            println!("    {}", paragraph.trim());
        }
    }
    println!();
}

/// Footer line for paged result lists.
pub fn page_footer(page: usize, pages: usize, total: usize) {
    println!();
    println!(
        "  {}",
        format!("page {page}/{pages} · {total} meal(s)").dimmed()
    );
}
