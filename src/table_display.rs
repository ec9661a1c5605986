use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;
use serde_json::Value;

use scriptblox::config::config::DisplayConfig;

/// Column header and JSON pointer into a script record
const COLUMNS: [(&str, &str); 8] = [
    ("Title", "/title"),
    ("Game", "/game/name"),
    ("Views", "/views"),
    ("Likes", "/likeCount"),
    ("Verified", "/verified"),
    ("Key", "/key"),
    ("Patched", "/isPatched"),
    ("Updated", "/updatedAt"),
];

pub fn display_scripts(scripts: &[Value], display: &DisplayConfig) {
    if scripts.is_empty() {
        print_status("No scripts found.", display.use_colors, false);
        return;
    }

    println!("{}", render_table(scripts, display.max_title_width));
    print_status(
        &format!("{} scripts returned", scripts.len()),
        display.use_colors,
        true,
    );
}

pub fn print_json(scripts: &[Value]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(scripts)?);
    Ok(())
}

pub fn render_table(scripts: &[Value], max_title_width: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        COLUMNS
            .iter()
            .map(|(name, _)| Cell::new(name).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for script in scripts {
        table.add_row(script_row(script, max_title_width));
    }

    table
}

/// One table row. Missing fields render as empty cells; the record schema
/// belongs to the service.
pub fn script_row(script: &Value, max_title_width: usize) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|(name, pointer)| {
            let text = cell_text(script.pointer(pointer));
            if *name == "Title" {
                truncate(&text, max_title_width)
            } else {
                text
            }
        })
        .collect()
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Bool(false)) => "no".to_string(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 || text.chars().count() <= max_width {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn print_status(message: &str, use_colors: bool, success: bool) {
    match (use_colors, success) {
        (false, _) => println!("\n{message}"),
        (true, true) => println!("\n{}", message.green()),
        (true, false) => println!("\n{}", message.yellow()),
    }
}
