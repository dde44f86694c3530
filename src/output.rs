//! CLI output formatting and display helpers.

use anyhow::Result;
use mealpick_core::{GeneratedDish, Recipe};
use serde::Serialize;

/// Separator between ingredient entries on one line.
const INGREDIENT_SEPARATOR: &str = "、";

/// Returns terminal width from COLUMNS, or 80 if unset/invalid.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 20)
        .unwrap_or(80)
}

/// Truncates text to at most `width` chars, appending ellipsis if truncated.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if text_len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut output: String = text.chars().take(width - 1).collect();
    output.push('…');
    output
}

/// Renders a recommended dish as a numbered block of lines.
pub fn dish_block_lines(position: usize, dish: &GeneratedDish, width: usize) -> Vec<String> {
    let recipe = &dish.recipe;
    let mut lines = vec![format!("{position}. {}", recipe.dish_name)];
    if !recipe.description.is_empty() {
        lines.push(truncate_to_width(&format!("   {}", recipe.description), width));
    }
    if !recipe.ingredients.is_empty() {
        let joined = recipe.ingredients.join(INGREDIENT_SEPARATOR);
        lines.push(truncate_to_width(&format!("   食材: {joined}"), width));
    }
    for (step_index, step) in recipe.steps.iter().enumerate() {
        lines.push(truncate_to_width(
            &format!("   {}) {step}", step_index + 1),
            width,
        ));
    }
    lines.push(format!("   图片: {}", dish.image_url));
    lines
}

/// One-line summary of a search hit: name plus ingredients.
pub fn search_row(recipe: &Recipe, width: usize) -> String {
    let joined = recipe.ingredients.join(INGREDIENT_SEPARATOR);
    let row = if joined.is_empty() {
        recipe.dish_name.clone()
    } else {
        format!("{}  ({joined})", recipe.dish_name)
    };
    truncate_to_width(&row, width)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
